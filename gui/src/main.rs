// Desktop entry point.
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::tao::dpi::LogicalSize;
use dioxus_desktop::{Config as DesktopConfig, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    tracing_subscriber::fmt::init();

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!(version = %cfg.version, "Loaded embedded configuration");
            cfg
        }
        Err(e) => {
            // The config is compiled into the binary, so this only fires if
            // the embedded JSON itself is broken.
            tracing::error!("Failed to parse embedded configuration: {}", e);
            panic!("invalid embedded configuration: {}", e);
        }
    };

    let desktop_config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.window.title.clone())
                .with_inner_size(LogicalSize::new(
                    app_config.window.width,
                    app_config.window.height,
                )),
        )
        .with_custom_head(format!(
            "<style>{}</style>",
            include_str!("../assets/style.css")
        ));

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);
}
