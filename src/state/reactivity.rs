// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor Y subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Leer el valor con un closure (sin clonar)
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        let result = updater(&mut self.value.borrow_mut());
        self.notify();
        result
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Notificar a todos los subscribers.
    /// Se copia la lista para que un callback pueda leer el estado o suscribirse.
    fn notify(&self) {
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
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
