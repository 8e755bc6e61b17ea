// Vista de detalle de juego ("/games/:id", nombre "game-detail")

use wasm_bindgen::JsValue;
use web_sys::Element;
use crate::dom::{router_link, ElementBuilder};
use crate::error::AppError;
use crate::models::route::RouteMatch;
use crate::state::AppState;

pub fn render_game_detail(route: &RouteMatch, state: &AppState) -> Result<Element, JsValue> {
    let id = route.param("id").ok_or_else(|| AppError::MissingParameter {
        endpoint: "route game-detail".to_string(),
        parameter: "id".to_string(),
    })?;

    let reviews = ElementBuilder::new("div")?
        .class("game-reviews")
        .attr("data-endpoint", &state.resolver.reviews().game_reviews(id)?)?
        .child(ElementBuilder::new("h2")?.text("Reviews").build())?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("view view-game-detail")
        .attr("data-view", "GameDetail")?
        .attr("data-game-id", id)?
        .attr("data-endpoint", &state.resolver.games().get(id)?)?
        .child(router_link("/games", "← Games", "back-link")?)?
        .child(ElementBuilder::new("h1")?.text(&format!("Game #{}", id)).build())?
        .child(reviews)?
        .build())
}
