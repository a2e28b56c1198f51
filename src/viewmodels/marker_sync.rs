// ============================================================================
// MARKER SYNC VIEWMODEL - Fetch / append / refresco + numeración de etiquetas
// ============================================================================
// Las escrituras pasan por una cola de un solo vuelo: append -> fetch en
// secuencia estricta, un click a la vez. Cada fetch lleva un número de
// secuencia y una respuesta vieja nunca pisa una más nueva.
// ============================================================================

use std::rc::Rc;
use crate::models::{DisplayMarker, LatLng, NewPointMarker, PointMarker};
use crate::services::{MarkerStore, StoreError};
use crate::state::MarkerState;

/// Resultado de construir marcadores a partir de los documentos
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedMarkers {
    pub markers: Vec<DisplayMarker>,
    pub skipped: usize,
}

/// Ordena por `timeStamp` (estable: empates conservan el orden del almacén),
/// descarta los `location` mal formados y numera 1..N sin huecos.
pub fn number_markers(mut records: Vec<PointMarker>) -> NumberedMarkers {
    records.sort_by_key(|record| record.time_stamp);

    let mut skipped = 0;
    let markers = records
        .iter()
        .filter_map(|record| match record.lat_lng() {
            Ok(position) => Some(position),
            Err(e) => {
                log::warn!("⚠️ Documento {} ignorado ('{}'): {}", record.id, record.location, e);
                skipped += 1;
                None
            }
        })
        .enumerate()
        .map(|(index, position)| DisplayMarker::new(position, index))
        .collect();

    NumberedMarkers { markers, skipped }
}

pub struct MarkerSync<S> {
    store: Rc<S>,
    state: MarkerState,
}

impl<S> Clone for MarkerSync<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            state: self.state.clone(),
        }
    }
}

impl<S: MarkerStore> MarkerSync<S> {
    pub fn new(store: S, state: MarkerState) -> Self {
        Self {
            store: Rc::new(store),
            state,
        }
    }

    pub fn state(&self) -> &MarkerState {
        &self.state
    }

    /// Leer toda la colección y reemplazar los marcadores de golpe.
    /// En error se conserva la lista anterior.
    pub async fn fetch_all(&self) -> Result<usize, StoreError> {
        let seq = self.state.begin_fetch();

        let records = match self.store.fetch_all().await {
            Ok(records) => records,
            Err(e) => {
                log::error!("❌ Error leyendo marcadores: {}", e);
                self.state.set_error(Some(e.to_string()));
                return Err(e);
            }
        };

        let NumberedMarkers { markers, skipped } = number_markers(records);
        let count = markers.len();

        if self.state.apply_fetch(seq, markers, skipped) {
            log::info!("📍 {} marcadores cargados ({} ignorados)", count, skipped);
        } else {
            log::warn!("⚠️ Respuesta de fetch #{} descartada: ya hay una más reciente", seq);
        }
        Ok(count)
    }

    /// Solo la escritura, sin refresco
    async fn persist(&self, position: LatLng) -> Result<String, StoreError> {
        let marker = NewPointMarker::now(position);

        match self.store.append(marker).await {
            Ok(id) => {
                log::info!("✅ Marcador guardado: {}", id);
                Ok(id)
            }
            Err(e) => {
                log::error!("❌ Error guardando marcador ({}, {}): {}", position.lat, position.lng, e);
                self.state.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    /// Persistir un punto y refrescar desde el almacén.
    /// Un fallo del refresco se registra pero no anula la escritura.
    pub async fn append(&self, position: LatLng) -> Result<String, StoreError> {
        let id = self.persist(position).await?;
        let _ = self.fetch_all().await;
        Ok(id)
    }

    /// Encolar un click. Si ya hay un drenado en curso, ese mismo drenado
    /// procesará la entrada; si no, este future drena la cola completa.
    /// La entrada en curso sale de la cola justo después de escribirse, antes
    /// del refresco: así el fetch trae los puntos ya guardados y `apply_fetch`
    /// conserva como provisionales solo los que siguen esperando.
    pub async fn submit(&self, position: LatLng) {
        self.state.enqueue_write(position);

        if !self.state.try_start_draining() {
            log::info!("⏳ Escritura encolada ({} pendientes)", self.state.pending_count());
            return;
        }

        while let Some(next) = self.state.peek_write() {
            let written = self.persist(next).await;
            self.state.next_write();

            // Errores ya registrados en persist; seguimos con el resto
            if written.is_ok() {
                let _ = self.fetch_all().await;
            }
        }

        self.state.stop_draining();
    }
}
