// ============================================================================
// HISTORY - Modo history (paths reales, sin #fragment)
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::window;

/// Path actual del navegador (`location.pathname`)
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Añadir una entrada al historial sin recargar
pub fn push_path(path: &str) -> Result<(), JsValue> {
    let history = window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(path))
}
