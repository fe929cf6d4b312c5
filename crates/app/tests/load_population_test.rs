//! Integration tests for loading population data from real workbooks.
//!
//! Workbooks are written with `rust_xlsxwriter` in the Census
//! `co-est2021-alldata` column layout and read back through `calamine`.
//! The Census export has no percent-difference column; column 12 holds the
//! prepared percent column the loader expects there.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_xlsxwriter::{Workbook, Worksheet};
use tempfile::tempdir;

use popview_application::{
    LoadPopulation, LoadPopulationError, LoadPopulationInput, SpreadsheetError,
};
use popview_domain::{AppSettings, PopulationRecord};
use popview_infrastructure::{CalamineSpreadsheetSource, SettingsRepository};

const SHEET: &str = "co-est2021-alldata";

const HEADER: [&str; 13] = [
    "SUMLEV",
    "REGION",
    "DIVISION",
    "STATE",
    "COUNTY",
    "STNAME",
    "CTYNAME",
    "ESTIMATESBASE2020",
    "POPESTIMATE2020",
    "POPESTIMATE2021",
    "NPOPCHG2020",
    "NPOPCHG2021",
    // Prepared column, not a Census field.
    "POP_PCT_DIFF",
];

enum Row<'a> {
    State(&'a str, [f64; 4], f64),
    County(&'a str, &'a str),
    Text(Vec<(u16, &'a str)>),
}

fn write_row(sheet: &mut Worksheet, row: u32, data: &Row<'_>) {
    match data {
        Row::State(name, values, pct) => {
            sheet.write_string(row, 0, "040").unwrap();
            sheet.write_number(row, 1, 3.0).unwrap();
            sheet.write_number(row, 2, 7.0).unwrap();
            sheet.write_number(row, 3, 48.0).unwrap();
            sheet.write_number(row, 4, 0.0).unwrap();
            sheet.write_string(row, 5, *name).unwrap();
            sheet.write_string(row, 6, *name).unwrap();
            sheet.write_number(row, 7, values[0]).unwrap();
            for (offset, value) in values.iter().enumerate() {
                sheet.write_number(row, 8 + offset as u16, *value).unwrap();
            }
            sheet.write_number(row, 12, *pct).unwrap();
        }
        Row::County(state, county) => {
            sheet.write_string(row, 0, "050").unwrap();
            sheet.write_string(row, 5, *state).unwrap();
            sheet.write_string(row, 6, *county).unwrap();
            for col in 7..=12 {
                sheet.write_number(row, col, 1.0).unwrap();
            }
        }
        Row::Text(cells) => {
            for (col, value) in cells {
                sheet.write_string(row, *col, *value).unwrap();
            }
        }
    }
}

fn write_workbook(path: &Path, rows: &[Row<'_>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET).unwrap();
    for (col, header) in HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (i, row) in rows.iter().enumerate() {
        write_row(sheet, i as u32 + 1, row);
    }
    workbook.save(path).unwrap();
}

fn input(path: &Path) -> LoadPopulationInput {
    let mut settings = AppSettings::default();
    settings.dataset.workbook_path = path.to_path_buf();
    LoadPopulationInput::from(&settings.dataset)
}

fn load(path: &Path) -> Result<Vec<PopulationRecord>, LoadPopulationError> {
    LoadPopulation::new(CalamineSpreadsheetSource::new())
        .execute(&input(path))
        .map(|output| output.records)
}

fn workbook_in(dir: &Path, rows: &[Row<'_>]) -> PathBuf {
    let path = dir.join("countyPopChange2020-2021.xlsx");
    write_workbook(&path, rows);
    path
}

#[test]
fn test_texas_scenario() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = workbook_in(
        dir.path(),
        &[
            Row::State("Texas", [100.0, 110.0, 5.0, 10.0], 9.5),
            Row::County("Texas", "Anderson County"),
        ],
    );

    let records = load(&path).expect("Failed to load workbook");

    assert_eq!(
        records,
        vec![PopulationRecord {
            state: "Texas".to_string(),
            pop_estimate_2020: 100,
            pop_estimate_2021: 110,
            pop_change_2020: 5,
            pop_change_2021: 10,
            pop_percent_diff: 9.5,
        }]
    );
}

#[test]
fn test_state_rows_in_sheet_order() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = workbook_in(
        dir.path(),
        &[
            Row::State("Alabama", [5_031_864.0, 5_049_846.0, 7_484.0, 17_982.0], 0.36),
            Row::County("Alabama", "Autauga County"),
            Row::County("Alabama", "Baldwin County"),
            Row::State("Alaska", [732_964.0, 732_673.0, -5_376.0, -291.0], -0.04),
            Row::County("Alaska", "Aleutians East Borough"),
            Row::State("Arizona", [7_177_986.0, 7_276_316.0, 26_606.0, 98_330.0], 1.37),
        ],
    );

    let output = LoadPopulation::new(CalamineSpreadsheetSource::new())
        .execute(&input(&path))
        .expect("Failed to load workbook");

    let states: Vec<&str> = output.records.iter().map(PopulationRecord::label).collect();
    assert_eq!(states, vec!["Alabama", "Alaska", "Arizona"]);
    assert_eq!(output.records[1].pop_change_2021, -291);
    assert_eq!(output.report.rows_scanned, 7);
    assert_eq!(output.report.filtered_rows, 3);
}

#[test]
fn test_short_rows_are_skipped() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = workbook_in(
        dir.path(),
        &[
            Row::Text(vec![(0, "040"), (5, "Guam")]),
            Row::State("Utah", [3_281_684.0, 3_337_975.0, 10_138.0, 56_291.0], 1.72),
            Row::Text(vec![(0, "Source: U.S. Census Bureau")]),
        ],
    );

    let output = LoadPopulation::new(CalamineSpreadsheetSource::new())
        .execute(&input(&path))
        .expect("Failed to load workbook");

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].state, "Utah");
    assert_eq!(output.report.short_rows, 2);
}

#[test]
fn test_non_numeric_estimate_row_is_excluded() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("pop.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET).unwrap();
    for (col, header) in HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    write_row(sheet, 1, &Row::State("Texas", [100.0, 110.0, 5.0, 10.0], 9.5));
    // Replace the 2020 estimate with text.
    sheet.write_string(1, 8, "not available").unwrap();
    workbook.save(&path).unwrap();

    let output = LoadPopulation::new(CalamineSpreadsheetSource::new())
        .execute(&input(&path))
        .expect("Failed to load workbook");

    assert!(output.records.is_empty());
    assert_eq!(output.report.rejected.len(), 1);
    assert_eq!(output.report.rejected[0].row, 1);
    assert_eq!(output.report.rejected[0].error.field(), "pop_estimate_2020");
}

#[test]
fn test_loading_twice_gives_equal_records() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = workbook_in(
        dir.path(),
        &[
            Row::State("Ohio", [11_797_517.0, 11_780_017.0, -1_553.0, -17_500.0], -0.15),
            Row::State("Iowa", [3_190_571.0, 3_193_079.0, 1_211.0, 2_508.0], 0.08),
        ],
    );

    let first = load(&path).expect("first load");
    let second = load(&path).expect("second load");

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("absent.xlsx");

    let result = load(&path);

    assert!(matches!(
        result,
        Err(LoadPopulationError::Spreadsheet(SpreadsheetError::NotFound(_)))
    ));
}

#[test]
fn test_missing_worksheet_is_fatal() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = workbook_in(dir.path(), &[]);
    let mut input = input(&path);
    input.worksheet = "states".to_string();

    let result = LoadPopulation::new(CalamineSpreadsheetSource::new()).execute(&input);

    match result {
        Err(LoadPopulationError::Spreadsheet(SpreadsheetError::WorksheetNotFound {
            name,
            available,
        })) => {
            assert_eq!(name, "states");
            assert_eq!(available, vec![SHEET.to_string()]);
        }
        other => panic!("expected missing worksheet, got {other:?}"),
    }
}

#[test]
fn test_settings_file_selects_workbook() {
    let dir = tempdir().expect("Failed to create temp directory");
    let workbook = workbook_in(
        dir.path(),
        &[Row::State("Vermont", [642_893.0, 645_570.0, -84.0, 2_677.0], 0.42)],
    );
    let settings_path = dir.path().join("popview.json");
    let settings_json = serde_json::json!({ "dataset": { "workbook_path": workbook } });
    std::fs::write(&settings_path, settings_json.to_string()).expect("Failed to write settings");

    let settings = SettingsRepository::with_path(&settings_path)
        .load()
        .expect("Failed to load settings");
    let output = LoadPopulation::new(CalamineSpreadsheetSource::new())
        .execute(&LoadPopulationInput::from(&settings.dataset))
        .expect("Failed to load workbook");

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].state, "Vermont");
}
