//! Page and InfoBox settings
//!
//! These are the read-only inputs of the page selector. They are built from a
//! [`PageProfile`](super::PageProfile) at startup and replaced wholesale when
//! the user edits the page list.
//!
//! # Main Types
//!
//! - [`PageSettings`] - Fixed-capacity ordered list of configured pages
//! - [`InfoBoxSettings`] - Names of the InfoBox panels that pages can pin
//!
//! # Invariants
//!
//! `PageSettings` always holds between 1 and [`MAX_PAGES`] valid pages. Slots
//! past `n_pages` are kept undefined. Both constructors and
//! [`PageSettings::compress`] restore this after edits.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};
use crate::layout::PageLayout;

/// Capacity of the page list
pub const MAX_PAGES: usize = 8;

/// Number of InfoBox panels
pub const MAX_PANELS: usize = 8;

/// Panels reserved for the automatic flight mode switch
/// (circling, cruise, final glide)
pub const PREASSIGNED_PANELS: usize = 3;

/// Returned for indices outside the configured range
static UNDEFINED_LAYOUT: PageLayout = PageLayout::undefined();

/// Ordered list of configured pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pages: [PageLayout; MAX_PAGES],
    n_pages: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        let mut pages = [PageLayout::undefined(); MAX_PAGES];
        pages[0] = PageLayout::default_map();
        pages[1] = PageLayout::full_screen();

        Self { pages, n_pages: 2 }
    }
}

impl PageSettings {
    /// Build settings from an ordered list of layouts
    ///
    /// Undefined entries are dropped first. Fails when more than
    /// [`MAX_PAGES`] valid layouts remain, or none do.
    pub fn from_layouts(layouts: &[PageLayout]) -> Result<Self> {
        let valid: Vec<PageLayout> = layouts.iter().filter(|l| l.valid).copied().collect();

        if valid.len() > MAX_PAGES {
            return Err(PageError::InvalidSettings(format!(
                "{} pages configured, at most {} supported",
                valid.len(),
                MAX_PAGES
            )));
        }

        if valid.is_empty() {
            return Err(PageError::InvalidSettings(
                "no valid pages configured".to_string(),
            ));
        }

        let mut pages = [PageLayout::undefined(); MAX_PAGES];
        pages[..valid.len()].copy_from_slice(&valid);

        Ok(Self {
            pages,
            n_pages: valid.len(),
        })
    }

    /// Move valid pages to the front, preserving order, and recount them
    pub fn compress(&mut self) {
        let mut count = 0;
        for i in 0..self.n_pages {
            if self.pages[i].valid {
                self.pages[count] = self.pages[i];
                count += 1;
            }
        }

        for slot in &mut self.pages[count..] {
            *slot = PageLayout::undefined();
        }

        self.n_pages = count;
    }

    /// Number of configured pages
    pub fn n_pages(&self) -> usize {
        self.n_pages
    }

    /// Layout at `index`, or an undefined layout if `index` is out of range
    pub fn layout(&self, index: usize) -> &PageLayout {
        self.pages[..self.n_pages]
            .get(index)
            .unwrap_or(&UNDEFINED_LAYOUT)
    }

    /// Configured pages in order
    pub fn iter(&self) -> impl Iterator<Item = &PageLayout> {
        self.pages[..self.n_pages].iter()
    }
}

/// InfoBox panel names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoBoxSettings {
    #[serde(default = "default_panel_names")]
    pub panels: Vec<String>,
}

fn default_panel_names() -> Vec<String> {
    let mut names: Vec<String> = ["Circling", "Cruise", "FinalGlide"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    names.extend((1..=MAX_PANELS - PREASSIGNED_PANELS).map(|i| format!("AUX-{}", i)));
    names
}

impl Default for InfoBoxSettings {
    fn default() -> Self {
        Self {
            panels: default_panel_names(),
        }
    }
}

impl InfoBoxSettings {
    /// Display name of `panel`, if it exists
    pub fn panel_name(&self, panel: usize) -> Option<&str> {
        if panel >= MAX_PANELS {
            return None;
        }
        self.panels.get(panel).map(|s| s.as_str())
    }
}
