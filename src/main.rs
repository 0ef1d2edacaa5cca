//! Employee roster editor
//!
//! Built with GPUI and the Monokai Pro palette. The roster lives in memory
//! and starts from a fixed seed list on every launch.

mod app;
mod components;
mod config;
mod controller;
mod error;
mod handlers;
mod models;
mod store;
mod theme;
mod visibility;

use gpui::{
    px, size, AppContext as _, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::AppConfig;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    init_tracing(&config);
    if let Some(err) = config_error {
        error!("{err:#}; falling back to default configuration");
    }

    Application::new().run(move |cx| {
        // Initialize gpui-component (required before using any component)
        gpui_component::init(cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(config.window_width), px(config.window_height)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(config.title.clone())),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let app_entity = cx.new(|cx| App::new(&config, window, cx));

            // Wrap in Root for gpui-component theming support
            cx.new(|cx| Root::new(app_entity.clone(), window, cx))
        });

        match opened {
            Ok(_) => info!(title = %config.title, "roster window opened"),
            Err(err) => {
                error!("failed to open window: {err:#}");
                cx.quit();
            }
        }
    });
}
