//! Configuration module for glidepages-rs
//!
//! This module handles:
//! - Page profiles (`pages.toml`): the ordered page list and InfoBox panel names
//! - UI session state (`ui_session.json`): the last configured page
//! - Runtime settings consumed by the page selector
//!
//! # App Data Location
//!
//! Files live in the platform-appropriate data directory under
//! `dev.glidepages.glidepages-rs`:
//! - **Linux**: `~/.local/share/dev.glidepages.glidepages-rs/`
//! - **macOS**: `~/Library/Application Support/dev.glidepages.glidepages-rs/`
//! - **Windows**: `%APPDATA%\dev.glidepages.glidepages-rs\`
//!
//! # Example
//!
//! ```ignore
//! use glidepages_rs::config::PageProfile;
//!
//! let profile = PageProfile::load_or_default(PageProfile::default_path());
//! let settings = profile.page_settings()?;
//! ```

pub mod settings;
pub mod ui_session;

pub use settings::*;
pub use ui_session::UiSession;

use crate::error::{PageError, Result, ResultExt};
use crate::layout::PageLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.glidepages.glidepages-rs";

/// Page profile filename
pub const PAGE_PROFILE_FILE: &str = "pages.toml";

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        PageError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).context("Failed to create app data directory")?;
    }

    Ok(dir)
}

// ==================== Page Profile ====================

/// On-disk form of the page configuration
///
/// ```toml
/// version = 1
///
/// [[pages]]
/// main = "map"
/// [pages.infobox]
/// auto_switch = true
///
/// [[pages]]
/// main = "flarm_radar"
/// bottom = "cross_section"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProfile {
    /// Version for future migration support
    #[serde(default = "default_profile_version")]
    pub version: u32,

    /// Pages in cycling order
    #[serde(default = "default_pages")]
    pub pages: Vec<PageLayout>,

    #[serde(default)]
    pub infobox: InfoBoxSettings,
}

fn default_profile_version() -> u32 {
    1
}

fn default_pages() -> Vec<PageLayout> {
    PageSettings::default().iter().copied().collect()
}

impl Default for PageProfile {
    fn default() -> Self {
        Self {
            version: 1,
            pages: default_pages(),
            infobox: InfoBoxSettings::default(),
        }
    }
}

impl PageProfile {
    /// Profile path inside the app data directory
    pub fn default_path() -> Option<PathBuf> {
        app_data_dir().map(|p| p.join(PAGE_PROFILE_FILE))
    }

    /// Capture the current settings as a profile
    pub fn from_settings(pages: &PageSettings, infobox: &InfoBoxSettings) -> Self {
        Self {
            version: 1,
            pages: pages.iter().copied().collect(),
            infobox: infobox.clone(),
        }
    }

    /// Parse a profile from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a profile from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page profile {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse page profile {:?}", path))
    }

    /// Load a profile, falling back to defaults when it is missing or broken
    pub fn load_or_default(path: Option<impl AsRef<Path>>) -> Self {
        let Some(path) = path else {
            tracing::warn!("No page profile location available, using default pages");
            return Self::default();
        };
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No page profile at {:?}, using default pages", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(profile) => {
                tracing::info!("Loaded {} pages from {:?}", profile.pages.len(), path);
                profile
            }
            Err(e) => {
                tracing::warn!("Failed to load page profile, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Save the profile as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create profile directory")?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PageError::Serialization(format!("Failed to serialize profile: {}", e)))?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write page profile {:?}", path))
    }

    /// Validated page settings for the selector
    pub fn page_settings(&self) -> Result<PageSettings> {
        PageSettings::from_layouts(&self.pages)
    }
}
