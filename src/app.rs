// ============================================================================
// APP - Aplicación principal: arranque único y montaje en #app
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{append_child, document, get_element_by_id, on_window_event, replace_children};
use crate::error::AppError;
use crate::router::{BundledViewLoader, Router};
use crate::services::{install_theme, ThemePreset};
use crate::state::AppState;
use crate::utils::constants::MOUNT_ID;
use crate::views::{render_layout, render_toast_container, render_toasts};

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Marcar el arranque; falla si ya se arrancó en este proceso
pub fn claim_start() -> Result<(), AppError> {
    STARTED.with(|started| {
        if started.replace(true) {
            Err(AppError::AlreadyStarted)
        } else {
            Ok(())
        }
    })
}

/// Buscar el punto de montaje; sin él no hay nada que renderizar
pub fn locate_mount<T>(id: &str, lookup: impl FnOnce(&str) -> Option<T>) -> Result<T, AppError> {
    lookup(id).ok_or_else(|| AppError::MountPointMissing {
        selector: format!("#{}", id),
    })
}

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
    router: Router,
}

impl App {
    /// Crear nueva aplicación (falla si no existe #app)
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let root = locate_mount(MOUNT_ID, get_element_by_id)?;
        let state = AppState::new(config);
        let router = Router::new(state.clone(), root.clone(), Rc::new(BundledViewLoader));

        Ok(Self { state, root, router })
    }

    /// Instalar tema, toasts y router, y pintar la ruta actual
    pub fn mount(&self, config: &AppConfig) -> Result<(), JsValue> {
        install_theme(ThemePreset::from_config(&config.theme_preset))?;
        self.install_toasts()?;

        replace_children(&self.root, &render_layout()?)?;
        self.router.intercept_links()?;

        let router = self.router.clone();
        on_window_event("popstate", move |_| router.handle_location())?;

        self.router.handle_location();
        log::info!("✅ [APP] Montada en #{}", MOUNT_ID);
        Ok(())
    }

    /// Contenedor global #app-toast (fuera de #app) + re-render en cada cambio
    fn install_toasts(&self) -> Result<(), JsValue> {
        let body = document()
            .and_then(|doc| doc.body())
            .ok_or_else(|| JsValue::from_str("No body"))?;
        let container = render_toast_container()?;
        append_child(&body, &container)?;

        let service = self.state.toasts.clone();
        self.state.toasts.subscribe(move || {
            if let Err(e) = render_toasts(&container, &service) {
                log::error!("❌ Error pintando toasts: {:?}", e);
            }
        });
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> &Router {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mount_point_fails_fast() {
        let result = locate_mount::<()>(MOUNT_ID, |_| None);
        assert_eq!(
            result,
            Err(AppError::MountPointMissing { selector: "#app".to_string() })
        );
    }

    #[test]
    fn test_mount_point_found() {
        let found = locate_mount(MOUNT_ID, |id| (id == "app").then_some(42));
        assert_eq!(found, Ok(42));
    }

    #[test]
    fn test_start_claimed_once() {
        // thread_local: cada test corre en su propio hilo
        assert_eq!(claim_start(), Ok(()));
        assert_eq!(claim_start(), Err(AppError::AlreadyStarted));
    }
}
