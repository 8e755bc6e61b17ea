// ============================================================================
// ROUTER - Tabla de rutas + navegación con carga diferida de vistas
// ============================================================================

pub mod routes;
pub mod navigation;
pub mod history;

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlAnchorElement, MouseEvent};
use crate::dom::{get_element_by_id, on_click, replace_children};
use crate::models::route::RouteMatch;
use crate::state::AppState;
use crate::utils::constants::{ROUTER_LINK_ATTR, ROUTER_OUTLET_ID};
use crate::views::update_active_links;

pub use navigation::{BundledViewLoader, LazyViews, NavigationToken, NavigationTracker, Settled, ViewLoader};
pub use routes::{match_or_not_found, match_path, resolve_named, routes, GAME_DETAIL};

/// Router instalado en la app (clones comparten el mismo estado)
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

struct RouterInner {
    state: AppState,
    root: Element,
    tracker: NavigationTracker,
    views: LazyViews,
}

impl Router {
    pub fn new(state: AppState, root: Element, loader: Rc<dyn ViewLoader>) -> Self {
        Self {
            inner: Rc::new(RouterInner {
                state,
                root,
                tracker: NavigationTracker::new(),
                views: LazyViews::new(loader),
            }),
        }
    }

    /// Navegar a `path` añadiendo una entrada al historial
    pub fn navigate(&self, path: &str) -> Result<(), JsValue> {
        // Comparar con la última navegación pedida, no con la última pintada
        if self.inner.tracker.should_skip(path) {
            return Ok(());
        }
        history::push_path(path)?;
        self.transition(path);
        Ok(())
    }

    /// Re-resolver la ubicación actual (arranque y popstate)
    pub fn handle_location(&self) {
        self.transition(&history::current_path());
    }

    /// Resolver ruta, cargar la vista si hace falta y renderizarla.
    /// Si otra navegación empieza mientras tanto, esta se descarta al terminar.
    fn transition(&self, path: &str) {
        let route = match_or_not_found(path);
        let token = self.inner.tracker.begin(path);
        log::info!("🧭 Navegando a {} -> {}", route.path, route.view);

        let router = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = router.inner.views.get_or_load(route.view).await;
            let render = match router.inner.tracker.settle(token, loaded) {
                Settled::Render(render) => render,
                Settled::Failed(e) => {
                    log::error!("❌ Error cargando vista {}: {}", route.view, e);
                    router.inner.state.toasts.error("Navigation failed", &e.to_string());
                    return;
                }
                Settled::Superseded => {
                    log::debug!("⏭️ Navegación a {} superada, se descarta", route.path);
                    return;
                }
            };

            if let Err(e) = router.render(render, &route) {
                log::error!("❌ Error renderizando {}: {:?}", route.path, e);
                router.inner.state.toasts.error("Render failed", &format!("{:?}", e));
                return;
            }
            router.inner.state.current_route.set(Some(route));
        });
    }

    fn render(&self, render: crate::views::RenderFn, route: &RouteMatch) -> Result<(), JsValue> {
        let outlet = get_element_by_id(ROUTER_OUTLET_ID)
            .ok_or_else(|| JsValue::from_str("No router outlet"))?;
        let view = render(route, &self.inner.state)?;
        replace_children(&outlet, &view)?;
        update_active_links(&self.inner.root, &route.path)
    }

    /// Interceptar clicks en `<a data-link>` dentro de la app
    pub fn intercept_links(&self) -> Result<(), JsValue> {
        let router = self.clone();
        on_click(&self.inner.root, move |event: MouseEvent| {
            if event.default_prevented()
                || event.button() != 0
                || event.ctrl_key()
                || event.meta_key()
                || event.shift_key()
                || event.alt_key()
            {
                return;
            }
            let Some(anchor) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&format!("a[{}]", ROUTER_LINK_ATTR)).ok().flatten())
                .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
            else {
                return;
            };

            event.prevent_default();
            let href = anchor.get_attribute("href").unwrap_or_else(|| "/".to_string());
            if let Err(e) = router.navigate(&href) {
                log::error!("❌ Error navegando a {}: {:?}", href, e);
            }
        })
    }
}
