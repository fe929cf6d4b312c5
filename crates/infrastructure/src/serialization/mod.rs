//! JSON helpers for settings files.

mod json;

pub use json::*;
