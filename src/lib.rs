//! # glidepages-rs: Page switching for glide computer displays
//!
//! A glide computer screen shows one "page" at a time. A page combines a main
//! view (moving map, FLARM radar or thermal assistant), an optional bottom
//! widget (cross section) and an InfoBox panel setup. Pilots cycle through a
//! short configured list of pages. Some actions (e.g. "show map") temporarily
//! put a *special page* on top of that list without losing their place in it.
//!
//! ## Architecture
//!
//! - **Layout**: `PageLayout` value type and its presets
//! - **Config**: page profile (TOML), UI session (JSON), `PageSettings`
//! - **State**: `UiState` owned by the host, lent to the selector
//! - **Selector**: `PageSelector`, the page switching state machine
//! - **Display**: `MainWindow` / `ActionInterface` traits implemented by the host
//!
//! ## Example
//!
//! ```ignore
//! use glidepages_rs::{
//!     config::{PageProfile, UiSession},
//!     display::{TracingInterface, TracingWindow},
//!     PageSelector,
//! };
//!
//! let profile = PageProfile::load_or_default(PageProfile::default_path());
//! let settings = profile.page_settings()?;
//! let mut state = UiSession::load().restore(&settings);
//! let mut window = TracingWindow::new();
//! let mut interface = TracingInterface::new();
//!
//! let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
//! selector.update();
//! selector.next();
//! selector.show_map();
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod layout;
pub mod selector;
pub mod state;

// Re-export commonly used types
pub use config::{InfoBoxSettings, PageProfile, PageSettings, UiSession};
pub use display::{ActionInterface, MainWindow, MapHandle};
pub use error::{PageError, Result};
pub use layout::{BottomWidget, InfoBoxConfig, MainView, PageLayout};
pub use selector::PageSelector;
pub use state::UiState;
