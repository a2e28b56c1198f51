// ============================================================================
// MAP VIEW - Contenedor del mapa + render de overlays (sin lógica)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{append_child, ElementBuilder};
use crate::state::MapHandle;
use crate::utils::google_maps_ffi::{init_google_map, render_markers as bridge_render_markers};
use crate::viewmodels::map_viewmodel::MarkerOverlay;

pub const MAP_CONTAINER_ID: &str = "map";

/// Crear el contenedor y pedir al bridge que cargue el mapa.
/// Si el widget no carga, no se renderiza nada (solo log).
pub fn mount_map(root: &Element, config: &AppConfig) -> Result<(), JsValue> {
    let map = &config.map_config;
    let container = ElementBuilder::new("div")?
        .id(MAP_CONTAINER_ID)?
        .class("map-container")
        .attr("style", &format!("width: {}; height: {};", map.width, map.height))?
        .build();

    root.set_inner_html("");
    append_child(root, &container)?;

    if config.map_api_key.is_empty() {
        log::error!("❌ MAP_API_KEY no configurada: el mapa no se cargará");
        return Ok(());
    }

    let config_json = serde_json::to_string(map)
        .map_err(|e| JsValue::from_str(&format!("Error serializando MapConfig: {}", e)))?;

    if let Err(e) = init_google_map(MAP_CONTAINER_ID, &config.map_api_key, &config_json) {
        log::error!("❌ Error cargando Google Maps: {:?}", e);
    }
    Ok(())
}

/// Enviar overlays al mapa cargado
pub fn render_markers(handle: &MapHandle, overlays: &[MarkerOverlay]) -> Result<(), JsValue> {
    let json = serde_json::to_string(overlays)
        .map_err(|e| JsValue::from_str(&format!("Error serializando overlays: {}", e)))?;

    log::info!("🗺️ Renderizando {} marcadores ({} bytes)", overlays.len(), json.len());
    bridge_render_markers(&handle.container_id, &json)
}
