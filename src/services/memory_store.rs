// Almacén en memoria para tests: orden de inserción + inyección de fallos

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{NewPointMarker, PointMarker};
use super::marker_store::{MarkerStore, StoreError};

#[derive(Clone, Default)]
pub struct InMemoryStore {
    records: Rc<RefCell<Vec<PointMarker>>>,
    fail_fetch: Rc<RefCell<bool>>,
    fail_append: Rc<RefCell<bool>>,
    fetch_calls: Rc<RefCell<usize>>,
    next_id: Rc<RefCell<usize>>,
    // Se ejecuta una vez al inicio del siguiente append (escritura "en vuelo")
    append_hook: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<PointMarker>) -> Self {
        let store = Self::new();
        *store.records.borrow_mut() = records;
        store
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        *self.fail_fetch.borrow_mut() = fail;
    }

    pub fn set_fail_append(&self, fail: bool) {
        *self.fail_append.borrow_mut() = fail;
    }

    pub fn on_next_append(&self, hook: impl FnOnce() + 'static) {
        *self.append_hook.borrow_mut() = Some(Box::new(hook));
    }

    pub fn records(&self) -> Vec<PointMarker> {
        self.records.borrow().clone()
    }

    pub fn fetch_calls(&self) -> usize {
        *self.fetch_calls.borrow()
    }
}

impl MarkerStore for InMemoryStore {
    async fn fetch_all(&self) -> Result<Vec<PointMarker>, StoreError> {
        *self.fetch_calls.borrow_mut() += 1;
        if *self.fail_fetch.borrow() {
            return Err(StoreError::Network("fetch refused".to_string()));
        }
        Ok(self.records.borrow().clone())
    }

    async fn append(&self, marker: NewPointMarker) -> Result<String, StoreError> {
        let hook = self.append_hook.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
        if *self.fail_append.borrow() {
            return Err(StoreError::Http { status: 503, message: "unavailable".to_string() });
        }
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            format!("doc-{}", *next)
        };
        self.records.borrow_mut().push(marker.with_id(id.clone()));
        Ok(id)
    }
}
