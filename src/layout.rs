//! Page layout value types
//!
//! A page is the combination of a main view, an optional bottom widget and
//! the InfoBox panel configuration shown around it. Layouts are plain `Copy`
//! values: the selector compares and copies them but never mutates one in
//! place.
//!
//! # Main Types
//!
//! - [`PageLayout`] - One complete page
//! - [`MainView`] - What fills the main area (map, FLARM radar, thermal assistant)
//! - [`BottomWidget`] - What sits below the main area
//! - [`InfoBoxConfig`] - Whether InfoBoxes are shown, and which panel
//!
//! # Presets
//!
//! | Preset | Main | InfoBoxes | Bottom |
//! |--------|------|-----------|--------|
//! | [`PageLayout::default_map`] | Map | auto-switch | nothing |
//! | [`PageLayout::full_screen`] | Map | disabled | nothing |
//! | [`PageLayout::aux`] | Map | fixed panel | nothing |
//! | [`PageLayout::undefined`] | - | - | - (never displayed) |

use serde::{Deserialize, Serialize};

use crate::config::InfoBoxSettings;

/// Content of the main display area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MainView {
    /// Moving map
    #[default]
    Map,
    /// FLARM traffic radar
    FlarmRadar,
    /// Thermal centering assistant
    ThermalAssistant,
}

impl std::fmt::Display for MainView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainView::Map => write!(f, "Map"),
            MainView::FlarmRadar => write!(f, "FLARM radar"),
            MainView::ThermalAssistant => write!(f, "Thermal assistant"),
        }
    }
}

/// Widget shown below the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BottomWidget {
    #[default]
    Nothing,
    /// Vertical cross section along the current track
    CrossSection,
}

impl std::fmt::Display for BottomWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BottomWidget::Nothing => write!(f, "Nothing"),
            BottomWidget::CrossSection => write!(f, "Cross section"),
        }
    }
}

/// InfoBox panel configuration of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfoBoxConfig {
    /// Show InfoBoxes at all; `false` means the main view is full screen
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Let the flight mode pick the panel (circling, cruise, final glide)
    #[serde(default = "default_true")]
    pub auto_switch: bool,

    /// Explicit panel index, used when `auto_switch` is off
    #[serde(default)]
    pub panel: usize,
}

fn default_true() -> bool {
    true
}

impl Default for InfoBoxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_switch: true,
            panel: 0,
        }
    }
}

impl InfoBoxConfig {
    /// InfoBoxes hidden; the main view takes the whole screen
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            auto_switch: false,
            panel: 0,
        }
    }

    /// InfoBoxes pinned to one panel
    pub const fn fixed(panel: usize) -> Self {
        Self {
            enabled: true,
            auto_switch: false,
            panel,
        }
    }
}

/// One page: main view, bottom widget and InfoBox configuration
///
/// `valid == false` marks an unset slot. Such a layout is never displayed;
/// the selector skips it when asked to load it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default = "default_true")]
    pub valid: bool,

    #[serde(default)]
    pub main: MainView,

    #[serde(default)]
    pub bottom: BottomWidget,

    #[serde(default)]
    pub infobox: InfoBoxConfig,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::undefined()
    }
}

impl PageLayout {
    /// An unset slot
    pub const fn undefined() -> Self {
        Self {
            valid: false,
            main: MainView::Map,
            bottom: BottomWidget::Nothing,
            infobox: InfoBoxConfig::disabled(),
        }
    }

    /// Map with InfoBoxes that follow the flight mode
    pub const fn default_map() -> Self {
        Self {
            valid: true,
            main: MainView::Map,
            bottom: BottomWidget::Nothing,
            infobox: InfoBoxConfig {
                enabled: true,
                auto_switch: true,
                panel: 0,
            },
        }
    }

    /// Map only, no InfoBoxes and no bottom widget
    pub const fn full_screen() -> Self {
        Self {
            valid: true,
            main: MainView::Map,
            bottom: BottomWidget::Nothing,
            infobox: InfoBoxConfig::disabled(),
        }
    }

    /// Map with InfoBoxes pinned to `panel`
    pub const fn aux(panel: usize) -> Self {
        Self {
            valid: true,
            main: MainView::Map,
            bottom: BottomWidget::Nothing,
            infobox: InfoBoxConfig::fixed(panel),
        }
    }

    /// Copy of this layout with a different main view
    pub const fn with_main(self, main: MainView) -> Self {
        Self { main, ..self }
    }

    /// Copy of this layout with a different bottom widget
    pub const fn with_bottom(self, bottom: BottomWidget) -> Self {
        Self { bottom, ..self }
    }

    pub fn is_map(&self) -> bool {
        self.main == MainView::Map
    }

    /// Human-readable title, as shown in page lists
    ///
    /// Panel names are looked up in `infoboxes`; an out-of-range panel
    /// falls back to its number.
    pub fn title(&self, infoboxes: &InfoBoxSettings) -> String {
        if !self.valid {
            return "---".to_string();
        }

        let mut title = match self.main {
            MainView::Map if !self.infobox.enabled => "Map (Full screen)".to_string(),
            MainView::Map if self.infobox.auto_switch => "Map and InfoBoxes (Auto)".to_string(),
            MainView::Map => match infoboxes.panel_name(self.infobox.panel) {
                Some(name) => format!("Map and InfoBoxes ({})", name),
                None => format!("Map and InfoBoxes ({})", self.infobox.panel + 1),
            },
            other => other.to_string(),
        };

        if self.bottom == BottomWidget::CrossSection {
            title.push_str(", Cross section");
        }

        title
    }
}
