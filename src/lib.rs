// ============================================================================
// NUMBERED QUEST MARKERS - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM / llaman al bridge del mapa
// - ViewModels: Lógica UI (clicks, sincronización con el almacén)
// - Services: SOLO comunicación con Firestore
// - State: State Management con Rc<RefCell>
// - Models: PointMarker (persistido) y DisplayMarker (en pantalla)
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
mod dom;
mod views;
mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::models::LatLng;

// Instancia única de App (solo vive en el hilo de UI)
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Numbered Quest Markers - Rust Puro + MVVM");

    let app = App::new()?;
    app.render()?;
    app.load_markers();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Ejecutar `f` con la App si ya está inicializada
fn with_app(action: &str, f: impl FnOnce(&App)) {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => f(app),
        None => log::warn!("⚠️ [{}] App no está inicializada", action),
    });
}

/// Re-pintar los overlays del mapa con el estado actual
pub fn rerender_markers() {
    with_app("RERENDER", |app| {
        if let Err(e) = app.render_markers() {
            log::error!("❌ Error renderizando marcadores: {:?}", e);
        }
    });
}

/// Llamado por el bridge cuando Google Maps terminó de cargar
#[wasm_bindgen]
pub fn on_map_loaded(container_id: String) {
    with_app("MAP_LOADED", |app| {
        if let Err(e) = app.map_loaded(&container_id) {
            log::error!("❌ Error tras cargar el mapa: {:?}", e);
        }
    });
}

/// Llamado por el bridge cuando el mapa se destruye
#[wasm_bindgen]
pub fn on_map_unloaded() {
    with_app("MAP_UNLOADED", |app| app.map_unloaded());
}

/// Llamado por el bridge con las coordenadas del click
#[wasm_bindgen]
pub fn on_map_click(lat: f64, lng: f64) {
    with_app("MAP_CLICK", |app| app.map_clicked(LatLng::new(lat, lng)));
}

/// Desmontar el mapa (p.ej. antes de descargar la página)
#[wasm_bindgen]
pub fn unmount_app() {
    with_app("UNMOUNT", |app| app.unmount());
}
