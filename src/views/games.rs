// Vista de catálogo (rutas "/" y "/games")

use wasm_bindgen::JsValue;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::route::RouteMatch;
use crate::state::AppState;

pub fn render_games(_route: &RouteMatch, state: &AppState) -> Result<Element, JsValue> {
    let games = state.resolver.games();

    let list = ElementBuilder::new("div")?
        .class("games-list")
        .attr("data-endpoint", &games.list(None, None)?)?
        .build();
    let top = ElementBuilder::new("aside")?
        .class("games-top")
        .attr("data-endpoint", &games.top(None)?)?
        .child(ElementBuilder::new("h2")?.text("Top rated").build())?
        .build();
    let recent = ElementBuilder::new("aside")?
        .class("games-recent")
        .attr("data-endpoint", &games.recent(None)?)?
        .child(ElementBuilder::new("h2")?.text("Recently added").build())?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("view view-games")
        .attr("data-view", "Games")?
        .attr("data-genres-endpoint", &games.genres()?)?
        .attr("data-platforms-endpoint", &games.platforms()?)?
        .child(ElementBuilder::new("h1")?.text("Games").build())?
        .child(list)?
        .child(top)?
        .child(recent)?
        .build())
}
