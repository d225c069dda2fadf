#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![deny(clippy::unconditional_recursion)]

mod apps;
mod components;
mod config;
mod model;

use apps::GroupApp;
use config::Settings;
use eframe::NativeOptions;
use egui::ViewportBuilder;
use tracing::warn;
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() -> eframe::Result<()> {
    let _ = dotenv::dotenv();

    let stdout_log = tracing_subscriber::fmt::layer();
    tracing_subscriber::registry()
        .with(stdout_log.with_filter(EnvFilter::from_env("LOG_FILTER")))
        .init();

    let settings = Settings::from_env().unwrap_or_else(|err| {
        warn!(msg = format!("Invalid settings, falling back to defaults: [{err}]"));
        Settings::default()
    });

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Groups")
            .with_inner_size([1100., 760.]),
        ..Default::default()
    };
    eframe::run_native(
        "Group Manager",
        options,
        Box::new(move |_cc| Ok(Box::new(GroupApp::init(&settings)))),
    )
}
