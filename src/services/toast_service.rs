// ============================================================================
// TOAST SERVICE - Cola de notificaciones globales
// ============================================================================
// El servicio solo maneja la cola; la vista `views::toast` la pinta en el
// contenedor global #app-toast.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::models::toast::{Severity, Toast};
use crate::state::ReactiveState;

#[derive(Clone)]
pub struct ToastService {
    toasts: ReactiveState<Vec<Toast>>,
    next_id: Rc<Cell<u64>>,
    default_life_ms: u32,
}

impl ToastService {
    pub fn new(default_life_ms: u32) -> Self {
        Self {
            toasts: ReactiveState::new(Vec::new()),
            next_id: Rc::new(Cell::new(1)),
            default_life_ms,
        }
    }

    /// Encolar un toast (sin temporizador). Devuelve el toast creado.
    pub fn push(
        &self,
        severity: Severity,
        summary: &str,
        detail: Option<&str>,
        life_ms: Option<u32>,
    ) -> Toast {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let toast = Toast {
            id,
            severity,
            summary: summary.to_string(),
            detail: detail.map(str::to_string),
            life_ms: life_ms.unwrap_or(self.default_life_ms),
        };
        self.toasts.update(|list| list.push(toast.clone()));
        toast
    }

    /// Encolar y programar el cierre automático
    pub fn show(&self, severity: Severity, summary: &str, detail: Option<&str>) -> u64 {
        let toast = self.push(severity, summary, detail, None);
        log::debug!("🔔 Toast {} ({}): {}", toast.id, severity.as_str(), toast.summary);

        if toast.life_ms > 0 {
            let service = self.clone();
            let id = toast.id;
            gloo_timers::callback::Timeout::new(toast.life_ms, move || {
                service.remove(id);
            })
            .forget();
        }
        toast.id
    }

    pub fn error(&self, summary: &str, detail: &str) -> u64 {
        self.show(Severity::Error, summary, Some(detail))
    }

    /// Quitar un toast. Devuelve false si ya no estaba.
    pub fn remove(&self, id: u64) -> bool {
        let present = self.toasts.with(|list| list.iter().any(|t| t.id == id));
        if present {
            self.toasts.update(|list| list.retain(|t| t.id != id));
        }
        present
    }

    pub fn clear(&self) {
        self.toasts.set(Vec::new());
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.toasts.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_ids() {
        let service = ToastService::new(3000);
        let a = service.push(Severity::Info, "Guardado", None, None);
        let b = service.push(Severity::Error, "Error", Some("HTTP 500"), Some(0));
        assert_eq!(a.id + 1, b.id);
        assert_eq!(a.life_ms, 3000);
        assert_eq!(b.life_ms, 0);

        let list = service.toasts();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].summary, "Guardado");
        assert_eq!(list[1].detail.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_remove_and_clear() {
        let service = ToastService::new(1000);
        let a = service.push(Severity::Success, "A", None, None);
        let b = service.push(Severity::Warn, "B", None, None);
        assert!(service.remove(a.id));
        assert!(!service.remove(a.id));
        assert_eq!(service.toasts(), vec![b]);
        service.clear();
        assert!(service.toasts().is_empty());
    }

    #[test]
    fn test_subscribers_see_changes_from_clones() {
        let service = ToastService::new(1000);
        let seen = Rc::new(Cell::new(0usize));
        {
            let seen = seen.clone();
            let reader = service.clone();
            service.subscribe(move || seen.set(reader.toasts().len()));
        }
        let other = service.clone();
        other.push(Severity::Info, "x", None, None);
        other.push(Severity::Info, "y", None, None);
        assert_eq!(seen.get(), 2);
    }
}
