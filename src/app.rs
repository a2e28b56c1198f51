// ============================================================================
// APP - Aplicación principal: conecta estado, viewmodels y vista
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::get_element_by_id;
use crate::models::LatLng;
use crate::services::FirestoreClient;
use crate::state::{AppState, MapHandle};
use crate::utils::google_maps_ffi::destroy_google_map;
use crate::viewmodels::{MapViewModel, MarkerSync};
use crate::views::map_view;

/// Aplicación principal
pub struct App {
    state: AppState,
    map_vm: MapViewModel<FirestoreClient>,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        if !CONFIG.store_config.is_configured() {
            log::error!("❌ FIRESTORE_PROJECT_ID no configurado: no se podrán leer ni guardar marcadores");
        }
        let store = FirestoreClient::new(CONFIG.store_config.clone());
        let sync = MarkerSync::new(store, state.markers.clone());
        let map_vm = MapViewModel::new(state.map.clone(), sync);

        // Re-render de overlays en el siguiente tick (agrupa varios cambios)
        state.subscribe_to_changes(|| {
            Timeout::new(0, crate::rerender_markers).forget();
        });

        Ok(Self { state, map_vm, root })
    }

    /// Montar el contenedor del mapa
    pub fn render(&self) -> Result<(), JsValue> {
        log::info!("🎬 [APP] Montando mapa");
        map_view::mount_map(&self.root, &CONFIG)
    }

    /// Fetch inicial de la colección
    pub fn load_markers(&self) {
        let sync = self.map_vm.sync().clone();
        wasm_bindgen_futures::spawn_local(async move {
            // Errores ya registrados por el viewmodel
            let _ = sync.fetch_all().await;
        });
    }

    pub fn map_loaded(&self, container_id: &str) -> Result<(), JsValue> {
        self.map_vm.on_load(MapHandle::new(container_id));
        self.render_markers()
    }

    pub fn map_unloaded(&self) {
        self.map_vm.on_unload();
    }

    /// Marcador provisional + escritura + refresco en segundo plano
    pub fn map_clicked(&self, position: LatLng) {
        let map_vm = self.map_vm.clone();
        wasm_bindgen_futures::spawn_local(async move {
            map_vm.click(position).await;
        });
    }

    /// Pintar los marcadores actuales (no-op si el mapa no está cargado)
    pub fn render_markers(&self) -> Result<(), JsValue> {
        match self.state.map.handle() {
            Some(handle) => map_view::render_markers(&handle, &self.map_vm.overlays()),
            None => Ok(()),
        }
    }

    /// Desmontar el mapa; el bridge responde con on_map_unloaded
    pub fn unmount(&self) {
        if let Some(handle) = self.state.map.handle() {
            destroy_google_map(&handle.container_id);
        }
    }
}
