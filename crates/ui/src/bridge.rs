//! UI Bridge Module
//!
//! Converts domain data into the values the Slint window binds to.

use std::rc::Rc;

use popview_domain::PopulationCatalog;
use slint::{ModelRc, SharedString, StandardListViewItem, VecModel};

use crate::state::ViewState;

/// Text shown in the label area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelData {
    /// Main label.
    pub label: String,
    /// Secondary line.
    pub details: String,
}

impl From<&ViewState> for LabelData {
    fn from(state: &ViewState) -> Self {
        Self {
            label: state.label().to_string(),
            details: state.details().to_string(),
        }
    }
}

/// One list entry per record, labelled with the state name, in catalog order.
#[must_use]
pub fn list_entries(catalog: &PopulationCatalog) -> Vec<SharedString> {
    catalog.labels().map(SharedString::from).collect()
}

/// Builds the list model for the states view.
#[must_use]
pub fn list_model(catalog: &PopulationCatalog) -> ModelRc<StandardListViewItem> {
    let items: Vec<StandardListViewItem> = list_entries(catalog)
        .into_iter()
        .map(StandardListViewItem::from)
        .collect();
    Rc::new(VecModel::from(items)).into()
}
