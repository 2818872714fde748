// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod assets;
mod background;
mod config;
mod content;
mod error;
mod image_cache;
mod image_loader;
mod services;
mod settings;
mod startup;
mod state;
mod ui;

use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let app = AppWindow::new()?;
    let app_state = Rc::new(state::AppState::new());
    let settings = Rc::new(RefCell::new(settings::Settings::load()));

    // The shared gallery handle; installed before any card can request it.
    app_state.install_gallery(services::GalleryService::new(
        app.as_weak(),
        app_state.gallery.clone(),
        app_state.image_cache.clone(),
        app_state.scroll_lock.clone(),
    ));

    let projects = content::projects::projects();
    let galleries = Rc::new(assets::project_galleries(&projects));

    // Setup all UI event handlers
    ui::setup_handlers(&app, app_state.clone(), galleries.clone(), settings.clone());

    startup::populate(&app, &projects, &galleries, &settings.borrow());

    app.run()?;

    Ok(())
}
