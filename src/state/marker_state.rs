// ============================================================================
// MARKER STATE - Marcadores en pantalla + cola de escrituras + secuencia de fetch
// ============================================================================

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use crate::models::{DisplayMarker, LatLng};
use crate::state::ReactiveState;

/// Estado de marcadores (solo sesión actual)
#[derive(Clone)]
pub struct MarkerState {
    pub markers: ReactiveState<Vec<DisplayMarker>>,
    pub pending_writes: Rc<RefCell<VecDeque<LatLng>>>,
    pub draining: Rc<RefCell<bool>>,
    /// Diagnóstico: último error del almacén (se limpia con un fetch correcto)
    pub last_error: Rc<RefCell<Option<String>>>,
    /// Diagnóstico: documentos ignorados en el último fetch aplicado
    pub skipped_records: Rc<RefCell<usize>>,
    // Último fetch emitido / último fetch aplicado
    issued_fetch: Rc<RefCell<u64>>,
    applied_fetch: Rc<RefCell<u64>>,
}

impl MarkerState {
    pub fn new() -> Self {
        Self {
            markers: ReactiveState::new(Vec::new()),
            pending_writes: Rc::new(RefCell::new(VecDeque::new())),
            draining: Rc::new(RefCell::new(false)),
            last_error: Rc::new(RefCell::new(None)),
            skipped_records: Rc::new(RefCell::new(0)),
            issued_fetch: Rc::new(RefCell::new(0)),
            applied_fetch: Rc::new(RefCell::new(0)),
        }
    }

    /// Copia de los marcadores actuales
    pub fn get_markers(&self) -> Vec<DisplayMarker> {
        self.markers.get()
    }

    pub fn count(&self) -> usize {
        self.markers.with(|m| m.len())
    }

    /// Marcador provisional con etiqueta `count + 1`
    pub fn push_provisional(&self, position: LatLng) -> DisplayMarker {
        let marker = DisplayMarker::provisional(position, self.count());
        let pushed = marker.clone();
        self.markers.update(move |markers| markers.push(pushed));
        marker
    }

    /// Reservar número de secuencia para un fetch
    pub fn begin_fetch(&self) -> u64 {
        let mut issued = self.issued_fetch.borrow_mut();
        *issued += 1;
        *issued
    }

    /// Reemplaza la colección entera si `seq` es más reciente que el último
    /// fetch aplicado. Las escrituras aún en cola se vuelven a añadir como
    /// provisionales, numeradas después de las del almacén.
    /// Devuelve false si la respuesta llegó tarde.
    pub fn apply_fetch(&self, seq: u64, mut markers: Vec<DisplayMarker>, skipped: usize) -> bool {
        {
            let mut applied = self.applied_fetch.borrow_mut();
            if seq <= *applied {
                return false;
            }
            *applied = seq;
        }
        *self.skipped_records.borrow_mut() = skipped;
        *self.last_error.borrow_mut() = None;

        for position in self.pending_writes.borrow().iter() {
            markers.push(DisplayMarker::provisional(*position, markers.len()));
        }
        self.markers.set(markers);
        true
    }

    /// Encolar una escritura
    pub fn enqueue_write(&self, position: LatLng) {
        self.pending_writes.borrow_mut().push_back(position);
    }

    /// Escritura en curso: sigue en la cola hasta que el almacén la confirme
    pub fn peek_write(&self) -> Option<LatLng> {
        self.pending_writes.borrow().front().copied()
    }

    pub fn next_write(&self) -> Option<LatLng> {
        self.pending_writes.borrow_mut().pop_front()
    }

    pub fn pending_count(&self) -> usize {
        self.pending_writes.borrow().len()
    }

    /// Marca el inicio del drenado; false si ya hay uno en curso
    pub fn try_start_draining(&self) -> bool {
        let mut draining = self.draining.borrow_mut();
        if *draining {
            return false;
        }
        *draining = true;
        true
    }

    pub fn stop_draining(&self) {
        *self.draining.borrow_mut() = false;
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.last_error.borrow_mut() = error;
    }

    pub fn get_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    pub fn get_skipped_records(&self) -> usize {
        *self.skipped_records.borrow()
    }

    /// Suscribirse a cambios en la colección de marcadores
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.markers.subscribe(callback);
    }
}

impl Default for MarkerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provisional_markers_continue_the_numbering() {
        let state = MarkerState::new();
        state.apply_fetch(state.begin_fetch(), vec![DisplayMarker::new(LatLng::new(1.0, 1.0), 0)], 0);

        let marker = state.push_provisional(LatLng::new(2.0, 2.0));
        assert_eq!(marker.label.text, "2");
        assert!(marker.provisional);
        assert_eq!(state.count(), 2);
    }

    #[test]
    fn late_fetch_responses_are_discarded() {
        let state = MarkerState::new();
        let older = state.begin_fetch();
        let newer = state.begin_fetch();

        let fresh = vec![
            DisplayMarker::new(LatLng::new(1.0, 1.0), 0),
            DisplayMarker::new(LatLng::new(2.0, 2.0), 1),
        ];
        assert!(state.apply_fetch(newer, fresh.clone(), 0));
        assert!(!state.apply_fetch(older, Vec::new(), 0));
        assert_eq!(state.get_markers(), fresh);
    }

    #[test]
    fn queued_writes_survive_a_refresh() {
        let state = MarkerState::new();
        state.push_provisional(LatLng::new(30.0, 40.0));
        state.enqueue_write(LatLng::new(30.0, 40.0));

        state.apply_fetch(state.begin_fetch(), vec![DisplayMarker::new(LatLng::new(10.0, 20.0), 0)], 0);

        let markers = state.get_markers();
        assert_eq!(markers.len(), 2);
        assert!(!markers[0].provisional);
        assert_eq!(markers[1], DisplayMarker::provisional(LatLng::new(30.0, 40.0), 1));
    }

    #[test]
    fn only_one_drain_at_a_time() {
        let state = MarkerState::new();
        assert!(state.try_start_draining());
        assert!(!state.try_start_draining());
        state.stop_draining();
        assert!(state.try_start_draining());
    }

    #[test]
    fn writes_leave_the_queue_in_click_order() {
        let state = MarkerState::new();
        state.enqueue_write(LatLng::new(10.0, 20.0));
        state.enqueue_write(LatLng::new(30.0, 40.0));

        assert_eq!(state.pending_count(), 2);
        assert_eq!(state.next_write(), Some(LatLng::new(10.0, 20.0)));
        assert_eq!(state.next_write(), Some(LatLng::new(30.0, 40.0)));
        assert_eq!(state.next_write(), None);
    }
}
