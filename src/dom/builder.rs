// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        self.attr("id", id)
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    /// Agregar hijo
    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// Agregar varios hijos en orden
    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Result<Self, JsValue> {
        children.into_iter().try_fold(self, |builder, child| builder.child(child))
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}

/// Link interno manejado por el router (`<a href data-link>`)
pub fn router_link(href: &str, label: &str, class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .class(class)
        .attr("href", href)?
        .attr(crate::utils::constants::ROUTER_LINK_ATTR, "")?
        .text(label)
        .build())
}
