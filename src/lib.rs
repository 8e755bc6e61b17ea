// ============================================================================
// GAMEHUB WEB - FRONTEND (RUST PURO + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - Router: Tabla estática de rutas + carga diferida de vistas
// - Services: URLs de la API, toasts, tema
// - State: State Management con Rc<RefCell>
// - Models: Descriptores de endpoints, rutas, toasts
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::{claim_start, App};
use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::toast::Severity;
use crate::services::EndpointResolver;

// Instancia global de la app (se crea una vez, nunca se destruye)
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 GameHub Web - API en {}", CONFIG.api_base_url());

    bootstrap().map_err(|e| {
        log::error!("❌ [APP] Arranque fallido: {}", e);
        JsValue::from(e)
    })
}

fn bootstrap() -> Result<(), AppError> {
    claim_start()?;

    let app = App::new(&CONFIG)?;
    app.mount(&CONFIG).map_err(AppError::dom)?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Navegar desde JavaScript (equivalente a un click en un link del router)
#[wasm_bindgen]
pub fn navigate(path: &str) -> Result<(), JsValue> {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => app.router().navigate(path),
        None => Err(JsValue::from_str("App no está inicializada")),
    })
}

/// Mostrar un toast desde JavaScript (`success` | `info` | `warn` | `error`)
#[wasm_bindgen]
pub fn show_toast(severity: &str, summary: &str, detail: Option<String>) -> Result<f64, JsValue> {
    let severity: Severity = severity.parse().map_err(|e: String| JsValue::from_str(&e))?;
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => Ok(app.state().toasts.show(severity, summary, detail.as_deref()) as f64),
        None => Err(JsValue::from_str("App no está inicializada")),
    })
}

/// URL de un endpoint por nombre lógico (`"reviews"`, `"gameReviews"`, `"7"`).
/// Los opcionales toman su valor por defecto.
#[wasm_bindgen]
pub fn endpoint_url(resource: &str, operation: &str, id: Option<String>) -> Result<String, JsValue> {
    EndpointResolver::from_config()
        .resolve_by_name(resource, operation, id.as_deref())
        .map_err(JsValue::from)
}
