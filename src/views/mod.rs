// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica)
// ============================================================================

pub mod layout;
pub mod games;
pub mod game_detail;
pub mod reviews;
pub mod admin;
pub mod not_found;
pub mod toast;

use wasm_bindgen::JsValue;
use web_sys::Element;
use crate::models::route::{RouteMatch, ViewId};
use crate::state::AppState;

pub use layout::{render_layout, update_active_links};
pub use toast::{render_toast_container, render_toasts};

/// Firma común de las vistas de página
pub type RenderFn = fn(&RouteMatch, &AppState) -> Result<Element, JsValue>;

/// Tabla ViewId -> función de render
pub fn view_renderer(view: ViewId) -> RenderFn {
    match view {
        ViewId::Games => games::render_games,
        ViewId::GameDetail => game_detail::render_game_detail,
        ViewId::Reviews => reviews::render_reviews,
        ViewId::Admin => admin::render_admin,
        ViewId::NotFound => not_found::render_not_found,
    }
}
