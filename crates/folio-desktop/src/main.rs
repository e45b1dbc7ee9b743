//! Folio Desktop Application
//!
//! A flipbook viewer with notes that unlock behind a PIN.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod services;
mod state;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio=debug".parse().expect("Invalid log directive")),
        )
        .init();

    tracing::info!("Starting Folio...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .with_min_inner_size(LogicalSize::new(320.0, 480.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
