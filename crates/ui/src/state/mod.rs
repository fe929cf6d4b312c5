//! UI state management.

mod view_state;

pub use view_state::ViewState;
