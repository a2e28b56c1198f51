// ============================================================================
// MAP STATE - Contexto del mapa (handle ligado a load/unload del widget)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Referencia al mapa cargado. El objeto JS vive en el bridge, indexado por
/// el id del contenedor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapHandle {
    pub container_id: String,
}

impl MapHandle {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
        }
    }
}

/// Contexto explícito que se pasa a los handlers (sin variables globales)
#[derive(Clone, Default)]
pub struct MapContext {
    handle: Rc<RefCell<Option<MapHandle>>>,
}

impl MapContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, handle: MapHandle) {
        *self.handle.borrow_mut() = Some(handle);
    }

    pub fn detach(&self) -> Option<MapHandle> {
        self.handle.borrow_mut().take()
    }

    pub fn handle(&self) -> Option<MapHandle> {
        self.handle.borrow().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.borrow().is_some()
    }
}
