// ============================================================================
// TOAST VIEW - Contenedor global de notificaciones
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::Element;
use crate::dom::{append_child, clear_children, on_click, ElementBuilder};
use crate::models::toast::Toast;
use crate::services::ToastService;
use crate::utils::constants::TOAST_ELEMENT_ID;

/// Crear el contenedor global (#app-toast)
pub fn render_toast_container() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .id(TOAST_ELEMENT_ID)?
        .class("toast-container")
        .attr("aria-live", "polite")?
        .build())
}

fn render_toast(toast: &Toast, service: &ToastService) -> Result<Element, JsValue> {
    let close = ElementBuilder::new("button")?
        .class("toast-close")
        .attr("type", "button")?
        .attr("aria-label", "Close")?
        .text("×")
        .build();
    {
        let service = service.clone();
        let id = toast.id;
        on_click(&close, move |_| {
            service.remove(id);
        })?;
    }

    let mut builder = ElementBuilder::new("div")?
        .class(&format!("toast toast-{}", toast.severity.as_str()))
        .attr("role", "alert")?
        .attr("data-toast-id", &toast.id.to_string())?
        .child(ElementBuilder::new("strong")?.class("toast-summary").text(&toast.summary).build())?;

    if let Some(detail) = &toast.detail {
        builder = builder.child(ElementBuilder::new("p")?.class("toast-detail").text(detail).build())?;
    }
    builder.child(close).map(ElementBuilder::build)
}

/// Re-pintar todos los toasts en el contenedor
pub fn render_toasts(container: &Element, service: &ToastService) -> Result<(), JsValue> {
    clear_children(container);
    for toast in service.toasts() {
        append_child(container, &render_toast(&toast, service)?)?;
    }
    Ok(())
}
