//! Page selector
//!
//! Switches between the configured pages and the temporary "special" page.
//!
//! The selector is a short-lived borrow of everything it touches: the page
//! settings (read-only), the [`UiState`] (read-write) and the two
//! collaborators. Build one per event, run the operation, drop it.
//!
//! ```text
//!            next/prev                     open_layout / show_map / show_only_map
//!   ┌──────────────────────┐            ┌──────────────────────────┐
//!   ▼                      │            │                          ▼
//! Configured page i ───────┴────────────┘               Special page (override)
//!   ▲                                                           │
//!   └──── restore / next / prev (index unchanged) ──────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
//! selector.next();
//! let map = selector.show_map();
//! ```

use crate::config::{PageSettings, MAX_PANELS};
use crate::display::{ActionInterface, MainWindow, MapHandle};
use crate::layout::{MainView, PageLayout};
use crate::state::UiState;

/// Page switching operations over a borrowed UI context
pub struct PageSelector<'a> {
    settings: &'a PageSettings,
    state: &'a mut UiState,
    window: &'a mut dyn MainWindow,
    interface: &'a mut dyn ActionInterface,
}

impl<'a> PageSelector<'a> {
    pub fn new(
        settings: &'a PageSettings,
        state: &'a mut UiState,
        window: &'a mut dyn MainWindow,
        interface: &'a mut dyn ActionInterface,
    ) -> Self {
        Self {
            settings,
            state,
            window,
            interface,
        }
    }

    /// Configured layout at the current index, ignoring any special page
    pub fn configured_layout(&self) -> PageLayout {
        *self.settings.layout(self.state.page_index)
    }

    /// Layout currently on screen: the special page if set, else the
    /// configured one
    pub fn current_layout(&self) -> PageLayout {
        self.state
            .special_page
            .unwrap_or_else(|| self.configured_layout())
    }

    /// Index `next` would switch to
    ///
    /// While a special page is active this is the current index: leaving the
    /// special page goes back to the last configured page instead of
    /// skipping past it.
    pub fn next_index(&self) -> usize {
        if self.state.has_special_page() {
            return self.state.page_index;
        }

        let n_pages = self.settings.n_pages();
        (self.state.page_index % n_pages + 1) % n_pages
    }

    /// Index `prev` would switch to
    pub fn prev_index(&self) -> usize {
        if self.state.has_special_page() {
            return self.state.page_index;
        }

        let n_pages = self.settings.n_pages();
        (self.state.page_index % n_pages + n_pages - 1) % n_pages
    }

    /// Switch to the next configured page
    pub fn next(&mut self) {
        let index = self.next_index();
        self.switch_to(index);
    }

    /// Switch to the previous configured page
    pub fn prev(&mut self) {
        let index = self.prev_index();
        self.switch_to(index);
    }

    fn switch_to(&mut self, index: usize) {
        tracing::debug!(
            from = self.state.page_index,
            to = index,
            special = self.state.has_special_page(),
            "Switching page"
        );

        self.state.page_index = index;
        self.state.special_page = None;

        self.update();
    }

    /// Reapply the layout currently on screen
    pub fn update(&mut self) {
        let layout = self.current_layout();
        self.load_layout(&layout);
    }

    /// Show `layout` as the special page, keeping the page index
    pub fn open_layout(&mut self, layout: PageLayout) {
        tracing::debug!(main = %layout.main, bottom = %layout.bottom, "Opening special page");

        self.state.special_page = Some(layout);
        self.load_layout(&layout);
    }

    /// Leave the special page and go back to the configured one
    ///
    /// Does nothing if no special page is active.
    pub fn restore(&mut self) {
        if self.state.special_page.take().is_none() {
            return;
        }

        tracing::debug!(page = self.state.page_index, "Restoring configured page");

        let layout = self.configured_layout();
        self.load_layout(&layout);
    }

    /// Ask the window to call [`restore`](Self::restore) once the current
    /// event has been handled
    pub fn deferred_restore(&mut self) {
        self.window.deferred_restore_page();
    }

    /// Make sure the map is the main view and return it
    ///
    /// If the configured page already is a map page, the special page is
    /// dropped. Otherwise a map variant of the current page is opened as the
    /// special page, which keeps its bottom widget and InfoBox setup.
    pub fn show_map(&mut self) -> MapHandle {
        let layout = self.current_layout();
        if !layout.is_map() {
            if self.configured_layout().is_map() {
                self.restore();
            } else {
                self.open_layout(layout.with_main(MainView::Map));
            }
        }

        self.window.activate_map()
    }

    /// Show the map alone, without InfoBoxes or bottom widget
    pub fn show_only_map(&mut self) -> MapHandle {
        self.open_layout(PageLayout::full_screen());
        self.window.activate_map()
    }

    /// Apply `layout` to the window without touching the page index or the
    /// special page
    fn load_layout(&mut self, layout: &PageLayout) {
        if !layout.valid {
            tracing::trace!("Ignoring undefined layout");
            return;
        }

        let infobox = &layout.infobox;
        if !infobox.enabled {
            self.window.set_full_screen(true);
            self.state.auxiliary_enabled = false;
        } else if !infobox.auto_switch && infobox.panel < MAX_PANELS {
            self.window.set_full_screen(false);
            self.state.auxiliary_enabled = true;
            self.state.auxiliary_index = infobox.panel;
        } else {
            self.window.set_full_screen(false);
            self.state.auxiliary_enabled = false;
        }

        self.window.set_bottom_widget(layout.bottom);

        match layout.main {
            MainView::Map => {
                self.window.activate_map();
            }
            MainView::FlarmRadar => self.window.show_traffic_radar(),
            MainView::ThermalAssistant => self.window.show_thermal_assistant(),
        }

        self.interface.update_display_mode(self.state);
        self.interface.send_ui_state(self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{MockActionInterface, MockMainWindow};
    use crate::layout::{BottomWidget, InfoBoxConfig};
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn expect_notifications(interface: &mut MockActionInterface) {
        interface
            .expect_update_display_mode()
            .times(1)
            .return_const(());
        interface.expect_send_ui_state().times(1).return_const(());
    }

    #[test]
    fn test_invalid_layout_is_ignored() {
        let settings = PageSettings::default();
        let mut state = UiState::at_page(1);
        let before = state.clone();
        let mut window = MockMainWindow::new();
        let mut interface = MockActionInterface::new();

        let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
        selector.load_layout(&PageLayout::undefined());
        drop(selector);

        assert_eq!(state, before);
    }

    #[test]
    fn test_full_screen_dispatch_order() {
        let settings = PageSettings::default();
        let mut state = UiState {
            auxiliary_enabled: true,
            ..Default::default()
        };
        let mut window = MockMainWindow::new();
        let mut interface = MockActionInterface::new();
        let mut seq = Sequence::new();

        window
            .expect_set_full_screen()
            .with(eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        window
            .expect_set_bottom_widget()
            .with(eq(BottomWidget::Nothing))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        window
            .expect_activate_map()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(MapHandle(1));
        interface
            .expect_update_display_mode()
            .withf(|s: &UiState| !s.auxiliary_enabled)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        interface
            .expect_send_ui_state()
            .withf(|s: &UiState| s.special_page == Some(PageLayout::full_screen()))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
        selector.open_layout(PageLayout::full_screen());
        drop(selector);

        assert!(!state.auxiliary_enabled);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_fixed_panel_enables_auxiliary() {
        let settings = PageSettings::default();
        let mut state = UiState::default();
        let mut window = MockMainWindow::new();
        let mut interface = MockActionInterface::new();

        window
            .expect_set_full_screen()
            .with(eq(false))
            .times(1)
            .return_const(());
        window
            .expect_set_bottom_widget()
            .with(eq(BottomWidget::CrossSection))
            .times(1)
            .return_const(());
        window
            .expect_show_thermal_assistant()
            .times(1)
            .return_const(());
        expect_notifications(&mut interface);

        let layout = PageLayout::aux(4)
            .with_main(MainView::ThermalAssistant)
            .with_bottom(BottomWidget::CrossSection);

        let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
        selector.open_layout(layout);
        drop(selector);

        assert!(state.auxiliary_enabled);
        assert_eq!(state.auxiliary_index, 4);
    }

    #[test]
    fn test_out_of_range_panel_falls_back_to_auto() {
        let settings = PageSettings::default();
        let mut state = UiState {
            auxiliary_enabled: true,
            auxiliary_index: 2,
            ..Default::default()
        };
        let mut window = MockMainWindow::new();
        let mut interface = MockActionInterface::new();

        window
            .expect_set_full_screen()
            .with(eq(false))
            .times(1)
            .return_const(());
        window.expect_set_bottom_widget().times(1).return_const(());
        window.expect_show_traffic_radar().times(1).return_const(());
        expect_notifications(&mut interface);

        let layout = PageLayout {
            infobox: InfoBoxConfig::fixed(MAX_PANELS),
            ..PageLayout::default_map()
        }
        .with_main(MainView::FlarmRadar);

        let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
        selector.open_layout(layout);
        drop(selector);

        assert!(!state.auxiliary_enabled);
        assert_eq!(state.auxiliary_index, 2);
    }

    #[test]
    fn test_restore_without_special_page_does_nothing() {
        let settings = PageSettings::default();
        let mut state = UiState::at_page(1);
        let mut window = MockMainWindow::new();
        let mut interface = MockActionInterface::new();

        let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
        selector.restore();
        drop(selector);

        assert_eq!(state, UiState::at_page(1));
    }

    #[test]
    fn test_next_from_special_page_keeps_index() {
        let settings = PageSettings::default();
        let mut state = UiState {
            special_page: Some(PageLayout::full_screen().with_main(MainView::FlarmRadar)),
            ..UiState::at_page(0)
        };
        let mut window = MockMainWindow::new();
        let mut interface = MockActionInterface::new();

        // page 0 is the default map page with auto-switching InfoBoxes
        window
            .expect_set_full_screen()
            .with(eq(false))
            .times(1)
            .return_const(());
        window.expect_set_bottom_widget().times(1).return_const(());
        window
            .expect_activate_map()
            .times(1)
            .return_const(MapHandle(3));
        expect_notifications(&mut interface);

        let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
        assert_eq!(selector.next_index(), 0);
        selector.next();
        drop(selector);

        assert_eq!(state.page_index, 0);
        assert!(state.special_page.is_none());
    }

    #[test]
    fn test_show_map_on_map_page_only_activates() {
        let settings = PageSettings::default();
        let mut state = UiState::default();
        let mut window = MockMainWindow::new();
        let mut interface = MockActionInterface::new();

        window
            .expect_activate_map()
            .times(1)
            .return_const(MapHandle(9));

        let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
        assert_eq!(selector.show_map(), MapHandle(9));
        drop(selector);

        assert!(state.special_page.is_none());
    }

    #[test]
    fn test_deferred_restore_goes_through_window() {
        let settings = PageSettings::default();
        let mut state = UiState {
            special_page: Some(PageLayout::full_screen()),
            ..Default::default()
        };
        let mut window = MockMainWindow::new();
        let mut interface = MockActionInterface::new();

        window
            .expect_deferred_restore_page()
            .times(1)
            .return_const(());

        let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
        selector.deferred_restore();
        drop(selector);

        assert!(state.special_page.is_some());
    }
}
