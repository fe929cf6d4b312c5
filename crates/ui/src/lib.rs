//! Popview UI - User interface layer
//!
//! This crate provides the Slint-based user interface for the Population Viewer.

// Allow lints that trigger on Slint-generated code which we cannot control
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

mod app_window;
pub mod bridge;
pub mod state;

pub use app_window::AppWindow;
pub use bridge::{LabelData, list_entries, list_model};
pub use state::ViewState;

// Include the generated Slint code
slint::include_modules!();
