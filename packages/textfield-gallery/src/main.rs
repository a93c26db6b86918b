//! Text Field Gallery - GPUI demonstration of the themed text field
//!
//! Shows the field in every variant, size and state, with a page-level
//! light/dark toggle.

mod app;
mod components;
mod config;
mod keyboard;
mod state;
mod theme;
mod views;

use anyhow::Result;
use gpui::prelude::*;
use gpui::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::GalleryConfig;

fn main() -> Result<()> {
    let (config, config_error) = match GalleryConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (GalleryConfig::default(), Some(e)),
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(e) = config_error {
        tracing::warn!("Using default configuration: {}", e);
    }

    tracing::info!("Starting Text Field Gallery");

    Application::new().run(move |cx: &mut App| {
        // Initialize state before the theme so both agree on the page mode
        state::init(&config, cx);
        theme::init(config.theme, cx);

        // Register keyboard bindings
        keyboard::init(cx);

        let opened = cx.open_window(
            WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Text Field Gallery".into()),
                    ..Default::default()
                }),
                window_bounds: Some(WindowBounds::Windowed(Bounds {
                    origin: point(px(100.0), px(100.0)),
                    size: size(px(config.window_width), px(config.window_height)),
                })),
                ..Default::default()
            },
            |_window, cx| cx.new(|cx| app::AppRoot::new(cx)),
        );

        match opened {
            Ok(_) => tracing::info!("Text Field Gallery window opened"),
            Err(e) => {
                tracing::error!("Failed to open window: {}", e);
                cx.quit();
            }
        }
    });

    Ok(())
}
