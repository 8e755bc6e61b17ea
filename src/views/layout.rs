use wasm_bindgen::JsValue;
use web_sys::Element;
use crate::dom::{query_selector_all, router_link, toggle_class, ElementBuilder};
use crate::utils::constants::ROUTER_OUTLET_ID;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/games", "Games"),
    ("/reviews", "Reviews"),
    ("/admin", "Admin"),
];

/// Shell de la app: header con navegación + outlet del router
pub fn render_layout() -> Result<Element, JsValue> {
    let links = NAV_LINKS
        .iter()
        .map(|(href, label)| router_link(href, label, "nav-link"))
        .collect::<Result<Vec<_>, _>>()?;

    let nav = ElementBuilder::new("nav")?
        .class("app-nav")
        .children(links)?
        .build();

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(router_link("/", "GameHub", "app-brand")?)?
        .child(nav)?
        .build();

    let outlet = ElementBuilder::new("main")?
        .class("router-view")
        .id(ROUTER_OUTLET_ID)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app-layout")
        .child(header)?
        .child(outlet)?
        .build())
}

/// Marcar como activo el link de navegación de la ruta actual
pub fn update_active_links(root: &Element, current_path: &str) -> Result<(), JsValue> {
    // "/" muestra Games, así que cuenta como /games
    let current = if current_path == "/" { "/games" } else { current_path };
    for link in query_selector_all(root, ".app-nav .nav-link")? {
        let href = link.get_attribute("href").unwrap_or_default();
        let active = current == href || current.starts_with(&format!("{}/", href));
        toggle_class(&link, "active", active)?;
    }
    Ok(())
}
