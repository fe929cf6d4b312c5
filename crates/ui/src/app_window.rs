//! Application window management
//!
//! Binds the Slint window to a [`ViewState`] shared by its callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use popview_domain::{PopulationCatalog, WindowSettings};
use slint::ComponentHandle;
use tracing::debug;

use crate::MainWindow;
use crate::bridge::{LabelData, list_model};
use crate::state::ViewState;

/// Application window wrapper with its interaction bindings.
pub struct AppWindow {
    window: MainWindow,
}

impl AppWindow {
    /// Creates the window and populates the states list from `catalog`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(
        catalog: Rc<PopulationCatalog>,
        settings: &WindowSettings,
    ) -> Result<Self, slint::PlatformError> {
        let window = MainWindow::new()?;

        window.set_window_title(settings.title.as_str().into());
        window.set_initial_width(settings.width as f32);
        window.set_initial_height(settings.height as f32);
        window.set_states(list_model(&catalog));

        let state = Rc::new(RefCell::new(ViewState::new(catalog, &settings.greeting)));
        apply_labels(&window, &LabelData::from(&*state.borrow()));

        let ui_weak = window.as_weak();
        let press_state = Rc::clone(&state);
        window.on_button_pressed(move || {
            let labels = {
                let mut state = press_state.borrow_mut();
                state.press_button();
                debug!(count = state.press_count(), "button pressed");
                LabelData::from(&*state)
            };
            if let Some(ui) = ui_weak.upgrade() {
                apply_labels(&ui, &labels);
            }
        });

        let ui_weak = window.as_weak();
        let select_state = state;
        window.on_state_selected(move |index| {
            let labels = {
                let mut state = select_state.borrow_mut();
                match state.select(index) {
                    Some(record) => debug!(state = %record.state, "state selected"),
                    None => {
                        debug!(index, "ignoring selection outside the list");
                        return;
                    }
                }
                LabelData::from(&*state)
            };
            if let Some(ui) = ui_weak.upgrade() {
                apply_labels(&ui, &labels);
            }
        });

        Ok(Self { window })
    }

    /// Runs the application event loop.
    ///
    /// This method blocks until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop fails.
    pub fn run(&self) -> Result<(), slint::PlatformError> {
        self.window.run()
    }
}

fn apply_labels(ui: &MainWindow, labels: &LabelData) {
    ui.set_label_text(labels.label.as_str().into());
    ui.set_details_text(labels.details.as_str().into());
}
