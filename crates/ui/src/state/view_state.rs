//! State behind the main window's label.

use std::rc::Rc;

use popview_domain::{PopulationCatalog, PopulationRecord};

/// Mutable view state, owned by the window and shared with its callbacks.
#[derive(Debug, Clone)]
pub struct ViewState {
    catalog: Rc<PopulationCatalog>,
    press_count: u32,
    selected: Option<usize>,
    label: String,
    details: String,
}

impl ViewState {
    /// Creates the state shown before any interaction.
    #[must_use]
    pub fn new(catalog: Rc<PopulationCatalog>, greeting: &str) -> Self {
        Self {
            catalog,
            press_count: 0,
            selected: None,
            label: greeting.to_string(),
            details: String::new(),
        }
    }

    /// Counts a button press and updates the label.
    pub fn press_button(&mut self) {
        self.press_count = self.press_count.saturating_add(1);
        self.label = format!("You have pressed the button {} times", self.press_count);
        self.details.clear();
    }

    /// Selects the record at a list position.
    ///
    /// Negative or out-of-range positions leave the state unchanged and
    /// return `None`.
    pub fn select(&mut self, index: i32) -> Option<&PopulationRecord> {
        let index = usize::try_from(index).ok()?;
        let record = self.catalog.get(index)?;
        self.label = record.label().to_string();
        self.details = record.summary();
        self.selected = Some(index);
        self.catalog.get(index)
    }

    /// Number of button presses so far.
    #[must_use]
    pub const fn press_count(&self) -> u32 {
        self.press_count
    }

    /// Currently selected record, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&PopulationRecord> {
        self.selected.and_then(|i| self.catalog.get(i))
    }

    /// Main label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Secondary line with the selected record's figures.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }
}
