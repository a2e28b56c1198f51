// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::state::{MapContext, MarkerState};

/// Estado global de la aplicación
#[derive(Clone, Default)]
pub struct AppState {
    pub map: MapContext,
    pub markers: MarkerState,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            map: MapContext::new(),
            markers: MarkerState::new(),
        }
    }

    /// Suscribirse a cambios que requieren re-render de los overlays
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.markers.subscribe(callback);
    }
}
