//! Collaborator interfaces of the page selector
//!
//! The selector never draws anything itself. It drives the window subsystem
//! through [`MainWindow`] and tells the rest of the interface about the new
//! state through [`ActionInterface`]. Hosts implement these traits over their
//! real windowing code; tests use the mockall-generated mocks.
//!
//! [`TracingWindow`] and [`TracingInterface`] are headless implementations
//! that only log what would happen. The demo binary uses them.

use crate::layout::BottomWidget;
use crate::state::UiState;

/// Opaque handle to the map window, returned when the map is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapHandle(pub u32);

/// Window subsystem operations used for page switching
#[cfg_attr(test, mockall::automock)]
pub trait MainWindow {
    /// Hide (`true`) or show (`false`) the InfoBoxes around the main view
    fn set_full_screen(&mut self, full_screen: bool);

    /// Replace the widget below the main view
    fn set_bottom_widget(&mut self, widget: BottomWidget);

    /// Make the map the main view and return it
    fn activate_map(&mut self) -> MapHandle;

    /// Make the FLARM traffic radar the main view
    fn show_traffic_radar(&mut self);

    /// Make the thermal assistant the main view
    fn show_thermal_assistant(&mut self);

    /// Schedule a page restore once the current event has been handled
    fn deferred_restore_page(&mut self);
}

/// Interface-wide notifications sent after a layout has been applied
#[cfg_attr(test, mockall::automock)]
pub trait ActionInterface {
    /// Refresh anything that depends on the display mode
    fn update_display_mode(&mut self, state: &UiState);

    /// Broadcast the updated interface state to observers
    fn send_ui_state(&mut self, state: &UiState);
}

/// Headless window that logs every call
#[derive(Debug, Default)]
pub struct TracingWindow {
    full_screen: bool,
    bottom: BottomWidget,
    map_activations: u32,
    restore_pending: bool,
}

impl TracingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    pub fn bottom_widget(&self) -> BottomWidget {
        self.bottom
    }

    /// Take the pending deferred restore request, if any
    pub fn take_restore_request(&mut self) -> bool {
        std::mem::take(&mut self.restore_pending)
    }
}

impl MainWindow for TracingWindow {
    fn set_full_screen(&mut self, full_screen: bool) {
        tracing::trace!(full_screen, "set_full_screen");
        self.full_screen = full_screen;
    }

    fn set_bottom_widget(&mut self, widget: BottomWidget) {
        tracing::trace!(%widget, "set_bottom_widget");
        self.bottom = widget;
    }

    fn activate_map(&mut self) -> MapHandle {
        self.map_activations += 1;
        tracing::trace!(activations = self.map_activations, "activate_map");
        MapHandle(0)
    }

    fn show_traffic_radar(&mut self) {
        tracing::trace!("show_traffic_radar");
    }

    fn show_thermal_assistant(&mut self) {
        tracing::trace!("show_thermal_assistant");
    }

    fn deferred_restore_page(&mut self) {
        tracing::trace!("deferred_restore_page");
        self.restore_pending = true;
    }
}

/// Interface layer that logs state broadcasts
#[derive(Debug, Default)]
pub struct TracingInterface {
    broadcasts: usize,
}

impl TracingInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of state broadcasts sent so far
    pub fn broadcasts(&self) -> usize {
        self.broadcasts
    }
}

impl ActionInterface for TracingInterface {
    fn update_display_mode(&mut self, state: &UiState) {
        tracing::trace!(
            auxiliary = state.auxiliary_enabled,
            panel = state.auxiliary_index,
            "update_display_mode"
        );
    }

    fn send_ui_state(&mut self, state: &UiState) {
        self.broadcasts += 1;
        match serde_json::to_string(state) {
            Ok(json) => tracing::debug!("UI state: {}", json),
            Err(e) => tracing::warn!("Failed to serialize UI state: {}", e),
        }
    }
}
