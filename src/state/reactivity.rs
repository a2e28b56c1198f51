// ============================================================================
// REACTIVITY - Valor compartido + subscribers que se notifican al cambiar
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo. Los clones comparten valor Y subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Leer el valor sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&*self.value.borrow())
    }

    /// Reemplazar el valor completo y notificar
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar sin mantener el borrow (un subscriber puede suscribir a otro)
    fn notify(&self) {
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(RefCell::new(0));

        let hits_clone = hits.clone();
        state.subscribe(move || *hits_clone.borrow_mut() += 1);

        let other = state.clone();
        other.set(5);
        other.update(|v| *v += 1);

        assert_eq!(state.get(), 6);
        assert_eq!(*hits.borrow(), 2);
    }

    #[test]
    fn subscribers_can_read_the_new_value() {
        let state = ReactiveState::new(vec![1]);
        let seen = Rc::new(RefCell::new(0));

        let (reader, seen_clone) = (state.clone(), seen.clone());
        state.subscribe(move || *seen_clone.borrow_mut() = reader.with(|v| v.len()));

        state.update(|v| v.push(2));
        assert_eq!(*seen.borrow(), 2);
    }
}
