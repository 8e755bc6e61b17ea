use wasm_bindgen::JsValue;
use web_sys::Element;
use crate::dom::{router_link, ElementBuilder};
use crate::models::route::RouteMatch;
use crate::state::AppState;

pub fn render_not_found(route: &RouteMatch, _state: &AppState) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("view view-not-found")
        .attr("data-view", "NotFound")?
        .child(ElementBuilder::new("h1")?.text("Page not found").build())?
        .child(ElementBuilder::new("p")?.text(&route.path).build())?
        .child(router_link("/", "Back to games", "back-link")?)?
        .build())
}
