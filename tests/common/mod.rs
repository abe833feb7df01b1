//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
pub mod recorder;

use glidepages_rs::{PageSelector, PageSettings, UiState};
use recorder::{RecordingInterface, RecordingWindow};

/// Everything a `PageSelector` borrows, owned in one place
pub struct Harness {
    pub settings: PageSettings,
    pub state: UiState,
    pub window: RecordingWindow,
    pub interface: RecordingInterface,
}

impl Harness {
    pub fn new(settings: PageSettings) -> Self {
        Self {
            settings,
            state: UiState::default(),
            window: RecordingWindow::default(),
            interface: RecordingInterface::default(),
        }
    }

    pub fn at_page(mut self, page_index: usize) -> Self {
        self.state.page_index = page_index;
        self
    }

    /// Borrow a selector over the harness
    pub fn selector(&mut self) -> PageSelector<'_> {
        PageSelector::new(
            &self.settings,
            &mut self.state,
            &mut self.window,
            &mut self.interface,
        )
    }

    /// Forget the calls recorded so far
    pub fn clear_calls(&mut self) {
        self.window.calls.clear();
        self.interface.display_mode_updates = 0;
        self.interface.sent_states.clear();
    }
}
