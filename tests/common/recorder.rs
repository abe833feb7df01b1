//! Recording implementations of the collaborator traits

use glidepages_rs::{ActionInterface, BottomWidget, MainWindow, MapHandle, UiState};

/// Handle returned by `RecordingWindow::activate_map`
pub const MAP: MapHandle = MapHandle(42);

/// A call made on the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCall {
    SetFullScreen(bool),
    SetBottomWidget(BottomWidget),
    ActivateMap,
    ShowTrafficRadar,
    ShowThermalAssistant,
    DeferredRestorePage,
}

#[derive(Debug, Default)]
pub struct RecordingWindow {
    pub calls: Vec<WindowCall>,
}

impl MainWindow for RecordingWindow {
    fn set_full_screen(&mut self, full_screen: bool) {
        self.calls.push(WindowCall::SetFullScreen(full_screen));
    }

    fn set_bottom_widget(&mut self, widget: BottomWidget) {
        self.calls.push(WindowCall::SetBottomWidget(widget));
    }

    fn activate_map(&mut self) -> MapHandle {
        self.calls.push(WindowCall::ActivateMap);
        MAP
    }

    fn show_traffic_radar(&mut self) {
        self.calls.push(WindowCall::ShowTrafficRadar);
    }

    fn show_thermal_assistant(&mut self) {
        self.calls.push(WindowCall::ShowThermalAssistant);
    }

    fn deferred_restore_page(&mut self) {
        self.calls.push(WindowCall::DeferredRestorePage);
    }
}

#[derive(Debug, Default)]
pub struct RecordingInterface {
    pub display_mode_updates: usize,
    pub sent_states: Vec<UiState>,
}

impl ActionInterface for RecordingInterface {
    fn update_display_mode(&mut self, _state: &UiState) {
        self.display_mode_updates += 1;
    }

    fn send_ui_state(&mut self, state: &UiState) {
        self.sent_states.push(state.clone());
    }
}
