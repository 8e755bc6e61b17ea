// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Vaciar un elemento
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Reemplazar todo el contenido de `parent` por `child`
pub fn replace_children(parent: &Element, child: &Element) -> Result<(), JsValue> {
    clear_children(parent);
    append_child(parent, child)
}

/// Añadir o quitar una clase según `on`
pub fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on).map(|_| ())
}

/// Query selector all sobre un elemento raíz
pub fn query_selector_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}
