// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// - Listeners en elementos del DOM: el navegador los limpia cuando el
//   elemento se destruye, closure.forget() es seguro.
// - Listeners globales (window): registrar UNA sola vez (ver bootstrap).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Listener global en window (solo llamar una vez por evento)
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    win.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
