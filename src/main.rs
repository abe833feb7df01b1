//! Page switching demo
//!
//! Runs a sequence of page commands against a headless window and logs what
//! the display would do.
//!
//! ```bash
//! glidepages [profile.toml] next next map prev only-map restore
//! RUST_LOG=trace glidepages radar restore-later
//! ```

use anyhow::{bail, Context};
use glidepages_rs::{
    config::{PageProfile, UiSession},
    display::{TracingInterface, TracingWindow},
    MainView, PageLayout, PageSelector,
};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// One user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Prev,
    Map,
    OnlyMap,
    Radar,
    Thermal,
    Restore,
    RestoreLater,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Ok(match s {
            "next" => Command::Next,
            "prev" => Command::Prev,
            "map" => Command::Map,
            "only-map" => Command::OnlyMap,
            "radar" => Command::Radar,
            "thermal" => Command::Thermal,
            "restore" => Command::Restore,
            "restore-later" => Command::RestoreLater,
            other => bail!(
                "unknown command {:?} (expected next, prev, map, only-map, radar, thermal, \
                 restore, restore-later)",
                other
            ),
        })
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,glidepages_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1).peekable();

    let profile = match args.next_if(|a| a.ends_with(".toml")) {
        Some(path) => {
            let path = PathBuf::from(path);
            PageProfile::load(&path).with_context(|| format!("loading {:?}", path))?
        }
        None => PageProfile::load_or_default(PageProfile::default_path()),
    };

    let commands = args
        .map(|a| a.parse::<Command>())
        .collect::<anyhow::Result<Vec<_>>>()?;

    let settings = profile.page_settings()?;
    let mut state = UiSession::load().restore(&settings);
    let mut window = TracingWindow::new();
    let mut interface = TracingInterface::new();

    tracing::info!("Starting with {} pages", settings.n_pages());
    for (i, layout) in settings.iter().enumerate() {
        tracing::info!("  page {}: {}", i + 1, layout.title(&profile.infobox));
    }

    PageSelector::new(&settings, &mut state, &mut window, &mut interface).update();

    for command in commands {
        let mut selector = PageSelector::new(&settings, &mut state, &mut window, &mut interface);
        match command {
            Command::Next => selector.next(),
            Command::Prev => selector.prev(),
            Command::Map => {
                selector.show_map();
            }
            Command::OnlyMap => {
                selector.show_only_map();
            }
            Command::Radar => {
                let layout = selector.current_layout().with_main(MainView::FlarmRadar);
                selector.open_layout(layout);
            }
            Command::Thermal => {
                let layout = PageLayout::full_screen().with_main(MainView::ThermalAssistant);
                selector.open_layout(layout);
            }
            Command::Restore => selector.restore(),
            Command::RestoreLater => selector.deferred_restore(),
        }

        if window.take_restore_request() {
            PageSelector::new(&settings, &mut state, &mut window, &mut interface).restore();
        }

        let layout = state.special_page.unwrap_or(*settings.layout(state.page_index));
        tracing::info!(
            "{:?} -> page {}{}: {}",
            command,
            state.page_index + 1,
            if state.has_special_page() { " (special)" } else { "" },
            layout.title(&profile.infobox)
        );
    }

    tracing::info!("{} state broadcasts sent", interface.broadcasts());

    if let Err(e) = UiSession::capture(&state).save() {
        tracing::warn!("Failed to save UI session: {}", e);
    }

    Ok(())
}
