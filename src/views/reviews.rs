use wasm_bindgen::JsValue;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::route::RouteMatch;
use crate::state::AppState;

pub fn render_reviews(_route: &RouteMatch, state: &AppState) -> Result<Element, JsValue> {
    let reviews = state.resolver.reviews();

    let mine = ElementBuilder::new("div")?
        .class("my-reviews")
        .attr("data-endpoint", &reviews.my_reviews(None, None)?)?
        .child(ElementBuilder::new("h2")?.text("My reviews").build())?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("view view-reviews")
        .attr("data-view", "Reviews")?
        .attr("data-endpoint", &reviews.list(None, None)?)?
        .attr("data-recent-endpoint", &reviews.recent(None)?)?
        .child(ElementBuilder::new("h1")?.text("Reviews").build())?
        .child(mine)?
        .build())
}
