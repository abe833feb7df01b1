//! Interface state touched by page switching
//!
//! `UiState` is created once at startup (usually via
//! [`UiSession::restore`](crate::config::UiSession::restore)) and lives as
//! long as the application. It is owned by the caller and lent to the
//! [`PageSelector`](crate::selector::PageSelector) for each operation, so all
//! writes happen through a single `&mut` borrow on the UI thread.

use serde::Serialize;

use crate::layout::PageLayout;

/// Page and auxiliary panel state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    /// Index into the configured pages; kept below `n_pages`
    pub page_index: usize,

    /// Temporary override of the configured page
    ///
    /// While set, it is what the display shows. `page_index` is left alone
    /// so leaving the special page returns to the same configured page.
    pub special_page: Option<PageLayout>,

    /// An explicitly chosen InfoBox panel is shown instead of the
    /// flight-mode panel
    pub auxiliary_enabled: bool,

    /// Panel shown while `auxiliary_enabled` is set
    pub auxiliary_index: usize,
}

impl UiState {
    /// State starting at configured page `page_index`
    pub fn at_page(page_index: usize) -> Self {
        Self {
            page_index,
            ..Default::default()
        }
    }

    pub fn has_special_page(&self) -> bool {
        self.special_page.is_some()
    }
}
