// ============================================================================
// MAP VIEWMODEL - Ciclo de vida del mapa, clicks y datos para los overlays
// ============================================================================

use serde::Serialize;
use crate::models::{DisplayMarker, LatLng, MarkerLabel};
use crate::services::MarkerStore;
use crate::state::{MapContext, MapHandle};
use crate::viewmodels::MarkerSync;

/// Overlay que se envía al widget: solo posición + etiqueta
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MarkerOverlay {
    pub position: LatLng,
    pub label: MarkerLabel,
}

impl From<&DisplayMarker> for MarkerOverlay {
    fn from(marker: &DisplayMarker) -> Self {
        Self {
            position: marker.position,
            label: marker.label.clone(),
        }
    }
}

pub struct MapViewModel<S> {
    context: MapContext,
    sync: MarkerSync<S>,
}

impl<S> Clone for MapViewModel<S> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
            sync: self.sync.clone(),
        }
    }
}

impl<S: MarkerStore> MapViewModel<S> {
    pub fn new(context: MapContext, sync: MarkerSync<S>) -> Self {
        Self { context, sync }
    }

    pub fn context(&self) -> &MapContext {
        &self.context
    }

    pub fn sync(&self) -> &MarkerSync<S> {
        &self.sync
    }

    /// El widget terminó de cargar
    pub fn on_load(&self, handle: MapHandle) {
        log::info!("🗺️ Mapa cargado en #{}", handle.container_id);
        self.context.attach(handle);
    }

    /// El widget se desmontó
    pub fn on_unload(&self) {
        if let Some(handle) = self.context.detach() {
            log::info!("🧹 Mapa liberado (#{})", handle.container_id);
        }
    }

    /// Parte síncrona del click: marcador provisional inmediato.
    /// Sin mapa cargado no hace nada.
    pub fn handle_click(&self, position: LatLng) -> Option<DisplayMarker> {
        if !self.context.is_loaded() {
            log::warn!("⚠️ Click en ({}, {}) antes de cargar el mapa, ignorado", position.lat, position.lng);
            return None;
        }
        if !position.is_finite() {
            log::warn!("⚠️ Click con coordenadas no finitas, ignorado");
            return None;
        }

        let marker = self.sync.state().push_provisional(position);
        log::info!("📌 Marcador provisional {} en ({}, {})", marker.label.text, position.lat, position.lng);
        Some(marker)
    }

    /// Click completo: provisional + escritura encolada + refresco
    pub async fn click(&self, position: LatLng) {
        if self.handle_click(position).is_some() {
            self.sync.submit(position).await;
        }
    }

    /// Overlays actuales para el widget
    pub fn overlays(&self) -> Vec<MarkerOverlay> {
        Self::prepare_overlays(&self.sync.state().get_markers())
    }

    pub fn prepare_overlays(markers: &[DisplayMarker]) -> Vec<MarkerOverlay> {
        markers.iter().map(MarkerOverlay::from).collect()
    }
}
