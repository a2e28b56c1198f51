// ============================================================================
// GOOGLE MAPS FFI - Foreign Function Interface para static/map_bridge.js
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica.
// El bridge llama de vuelta a on_map_loaded / on_map_unloaded / on_map_click.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Carga el script de Google Maps y crea el mapa en el contenedor
    #[wasm_bindgen(js_name = initGoogleMap, catch)]
    pub fn init_google_map(container_id: &str, api_key: &str, config_json: &str) -> Result<(), JsValue>;

    /// Reemplaza todos los marcadores del mapa por los overlays recibidos
    #[wasm_bindgen(js_name = renderMarkers, catch)]
    pub fn render_markers(container_id: &str, overlays_json: &str) -> Result<(), JsValue>;

    /// Destruye el mapa (dispara on_map_unloaded)
    #[wasm_bindgen(js_name = destroyGoogleMap)]
    pub fn destroy_google_map(container_id: &str);
}
