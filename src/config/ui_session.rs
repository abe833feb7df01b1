//! UI session state persistence
//!
//! Remembers which configured page was on screen when the application
//! closed, so the next launch resumes there.
//!
//! | Aspect | UI Session | Page Profile |
//! |--------|------------|--------------|
//! | **Purpose** | "Where I was" | "What my pages look like" |
//! | **Persistence** | Automatic (on close) | Explicit (page editor) |
//! | **Location** | `app_data_dir()/ui_session.json` | `app_data_dir()/pages.toml` |
//!
//! The special page is transient and never stored.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{app_data_dir, ensure_app_data_dir, PageSettings};
use crate::error::{PageError, Result, ResultExt};
use crate::state::UiState;

/// UI session state filename
pub const UI_SESSION_FILE: &str = "ui_session.json";

/// UI session state persisted between app launches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSession {
    /// Version for migration
    #[serde(default = "default_version")]
    pub version: u32,

    /// Last configured page index
    #[serde(default)]
    pub page_index: usize,
}

fn default_version() -> u32 {
    1
}

impl Default for UiSession {
    fn default() -> Self {
        Self {
            version: 1,
            page_index: 0,
        }
    }
}

impl UiSession {
    /// Snapshot the resumable part of `state`
    pub fn capture(state: &UiState) -> Self {
        Self {
            version: 1,
            page_index: state.page_index,
        }
    }

    /// Fresh UI state starting at the remembered page
    ///
    /// The index is clamped to the first page if the page list has shrunk
    /// since it was saved.
    pub fn restore(&self, settings: &PageSettings) -> UiState {
        if self.page_index < settings.n_pages() {
            return UiState::at_page(self.page_index);
        }

        tracing::warn!(
            "Saved page {} out of range ({} pages), starting at first page",
            self.page_index,
            settings.n_pages()
        );
        UiState::default()
    }

    /// Load UI session state from default location
    pub fn load() -> Self {
        match app_data_dir() {
            Some(dir) => Self::load_from(dir.join(UI_SESSION_FILE)),
            None => Self::default(),
        }
    }

    /// Load UI session state from `path`, using defaults on any error
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read UI session state: {}, using defaults", e);
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(session) => {
                tracing::info!("Loaded UI session state from {:?}", path);
                session
            }
            Err(e) => {
                tracing::warn!("Failed to parse UI session state: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save UI session state to default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(UI_SESSION_FILE))
    }

    /// Save UI session state to `path`
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            PageError::Serialization(format!("Failed to serialize UI session: {}", e))
        })?;

        std::fs::write(path, content).context("Failed to write UI session")?;

        tracing::debug!("Saved UI session state to {:?}", path);
        Ok(())
    }
}
