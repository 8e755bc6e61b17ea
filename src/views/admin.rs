use wasm_bindgen::JsValue;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::route::RouteMatch;
use crate::state::AppState;

pub fn render_admin(_route: &RouteMatch, state: &AppState) -> Result<Element, JsValue> {
    let games = state.resolver.games();

    Ok(ElementBuilder::new("section")?
        .class("view view-admin")
        .attr("data-view", "Admin")?
        .attr("data-create-endpoint", &games.create()?)?
        .attr("data-genres-endpoint", &games.genres()?)?
        .attr("data-platforms-endpoint", &games.platforms()?)?
        .child(ElementBuilder::new("h1")?.text("Admin").build())?
        .build())
}
