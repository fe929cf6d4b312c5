//! Application settings
//!
//! Every field has a default, so a settings file only needs the keys it
//! overrides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::layout::SheetLayout;

/// Where the population data lives and how its worksheet is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Path of the workbook, relative to the working directory unless absolute.
    #[serde(default = "default_workbook_path")]
    pub workbook_path: PathBuf,

    /// Name of the worksheet to read.
    #[serde(default = "default_worksheet")]
    pub worksheet: String,

    /// Column layout of the worksheet.
    #[serde(default)]
    pub layout: SheetLayout,
}

fn default_workbook_path() -> PathBuf {
    PathBuf::from("countyPopChange2020-2021.xlsx")
}

fn default_worksheet() -> String {
    "co-est2021-alldata".to_string()
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            workbook_path: default_workbook_path(),
            worksheet: default_worksheet(),
            layout: SheetLayout::default(),
        }
    }
}

/// Main window preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Window title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Initial width in logical pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Initial height in logical pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Label text shown before any interaction.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_title() -> String {
    "Population Viewer".to_string()
}

fn default_width() -> u32 {
    900
}

fn default_height() -> u32 {
    750
}

fn default_greeting() -> String {
    "This is our first Window".to_string()
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            greeting: default_greeting(),
        }
    }
}

/// Settings for the whole application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Data source settings.
    #[serde(default)]
    pub dataset: DatasetSettings,

    /// Window settings.
    #[serde(default)]
    pub window: WindowSettings,
}
