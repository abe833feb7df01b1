//! Test data builders for creating page layouts and settings

use glidepages_rs::{BottomWidget, InfoBoxConfig, MainView, PageLayout, PageSettings};

/// Builder for creating test PageLayouts
pub struct LayoutBuilder {
    layout: PageLayout,
}

impl LayoutBuilder {
    pub fn new(main: MainView) -> Self {
        Self {
            layout: PageLayout::default_map().with_main(main),
        }
    }

    pub fn bottom(mut self, bottom: BottomWidget) -> Self {
        self.layout.bottom = bottom;
        self
    }

    pub fn panel(mut self, panel: usize) -> Self {
        self.layout.infobox = InfoBoxConfig::fixed(panel);
        self
    }

    pub fn full_screen(mut self) -> Self {
        self.layout.infobox = InfoBoxConfig::disabled();
        self
    }

    pub fn build(self) -> PageLayout {
        self.layout
    }
}

/// Map, radar with cross section, thermal assistant on a fixed panel
pub fn mixed_settings() -> PageSettings {
    PageSettings::from_layouts(&[
        LayoutBuilder::new(MainView::Map).build(),
        LayoutBuilder::new(MainView::FlarmRadar)
            .bottom(BottomWidget::CrossSection)
            .build(),
        LayoutBuilder::new(MainView::ThermalAssistant).panel(5).build(),
    ])
    .expect("valid test settings")
}

/// `n` map pages, each pinned to a different panel so they are distinguishable
pub fn numbered_settings(n: usize) -> PageSettings {
    let layouts: Vec<_> = (0..n)
        .map(|i| LayoutBuilder::new(MainView::Map).panel(i).build())
        .collect();
    PageSettings::from_layouts(&layouts).expect("valid test settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_builder() {
        let layout = LayoutBuilder::new(MainView::FlarmRadar)
            .bottom(BottomWidget::CrossSection)
            .full_screen()
            .build();

        assert!(layout.valid);
        assert_eq!(layout.main, MainView::FlarmRadar);
        assert_eq!(layout.bottom, BottomWidget::CrossSection);
        assert!(!layout.infobox.enabled);
    }
}
