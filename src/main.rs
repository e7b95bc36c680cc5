// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod commands;
mod config;
mod error;
mod file_utils;
mod image_cache;
mod image_loader;
mod services;
mod startup;
mod state;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let app = AppWindow::new()?;
    let viewer = Rc::new(RefCell::new(services::ViewerService::new(
        image_loader::FsImageDecoder::new(),
    )?));

    // Setup all UI event handlers
    ui::setup_handlers(&app, viewer.clone(), &commands::TOOLBAR);
    startup::configure_startup_opening(&app, &viewer, &commands::TOOLBAR);

    app.run()?;

    Ok(())
}
