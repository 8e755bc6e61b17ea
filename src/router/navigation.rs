// ============================================================================
// NAVIGATION - Transición carga-luego-render con la última navegación ganando
// ============================================================================
// Cada navegación toma un token nuevo. Cuando la carga de la vista termina,
// solo se renderiza si su token sigue siendo el último. Las cargas de
// navegaciones abandonadas NO se cancelan: su resultado se descarta.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use crate::error::AppError;
use crate::models::route::ViewId;
use crate::views::{view_renderer, RenderFn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NavigationToken(u64);

/// Qué hacer con una carga de vista que acaba de terminar
#[derive(Debug, Clone, PartialEq)]
pub enum Settled<T, E> {
    /// Sigue siendo la última navegación: renderizar
    Render(T),
    /// Sigue siendo la última navegación pero la carga falló
    Failed(E),
    /// Otra navegación empezó después: descartar sin tocar el DOM
    Superseded,
}

/// Contador de navegaciones + último path pedido (no el último pintado)
#[derive(Debug, Default)]
pub struct NavigationTracker {
    latest: Cell<u64>,
    requested: RefCell<Option<String>>,
}

impl NavigationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empezar una navegación a `path` (invalida todas las anteriores)
    pub fn begin(&self, path: &str) -> NavigationToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        *self.requested.borrow_mut() = Some(path.to_string());
        NavigationToken(next)
    }

    pub fn is_current(&self, token: NavigationToken) -> bool {
        self.latest.get() == token.0
    }

    /// Path de la navegación más reciente, haya terminado de cargar o no
    pub fn requested_path(&self) -> Option<String> {
        self.requested.borrow().clone()
    }

    /// `path` ya es el destino de la última navegación: no hace falta otra
    pub fn should_skip(&self, path: &str) -> bool {
        self.requested.borrow().as_deref() == Some(path)
    }

    /// Decidir el destino de una carga terminada
    pub fn settle<T, E>(&self, token: NavigationToken, loaded: Result<T, E>) -> Settled<T, E> {
        if !self.is_current(token) {
            return Settled::Superseded;
        }
        match loaded {
            Ok(view) => Settled::Render(view),
            Err(e) => Settled::Failed(e),
        }
    }
}

pub type LoadFuture = Pin<Box<dyn Future<Output = Result<RenderFn, AppError>>>>;

/// Carga diferida de vistas
pub trait ViewLoader {
    fn load(&self, view: ViewId) -> LoadFuture;
}

/// Loader por defecto: las vistas vienen compiladas en el wasm, la carga cede
/// un turno al event loop (microtask) antes de entregar la vista.
pub struct BundledViewLoader;

impl ViewLoader for BundledViewLoader {
    fn load(&self, view: ViewId) -> LoadFuture {
        Box::pin(async move {
            let tick = js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL);
            JsFuture::from(tick).await.map_err(AppError::dom)?;
            log::debug!("📦 Vista cargada: {}", view);
            Ok::<RenderFn, AppError>(view_renderer(view))
        })
    }
}

/// Cache de vistas ya cargadas (la primera navegación a una vista la carga)
#[derive(Clone)]
pub struct LazyViews {
    loader: Rc<dyn ViewLoader>,
    loaded: Rc<RefCell<HashMap<ViewId, RenderFn>>>,
}

impl LazyViews {
    pub fn new(loader: Rc<dyn ViewLoader>) -> Self {
        Self {
            loader,
            loaded: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn cached(&self, view: ViewId) -> Option<RenderFn> {
        self.loaded.borrow().get(&view).copied()
    }

    pub fn is_loaded(&self, view: ViewId) -> bool {
        self.loaded.borrow().contains_key(&view)
    }

    /// Devolver la vista, cargándola si hace falta
    pub async fn get_or_load(&self, view: ViewId) -> Result<RenderFn, AppError> {
        if let Some(render) = self.cached(view) {
            return Ok(render);
        }
        let render = self.loader.load(view).await?;
        self.loaded.borrow_mut().insert(view, render);
        Ok(render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_navigation_wins() {
        let tracker = NavigationTracker::new();
        let first = tracker.begin("/games");
        assert!(tracker.is_current(first));

        let second = tracker.begin("/admin");
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second > first);
        assert_eq!(tracker.requested_path().as_deref(), Some("/admin"));
    }

    #[test]
    fn test_back_to_rendered_path_while_loading_wins() {
        let tracker = NavigationTracker::new();
        // /games ya pintada
        let games = tracker.begin("/games");
        assert_eq!(tracker.settle(games, Ok::<_, ()>(ViewId::Games)), Settled::Render(ViewId::Games));

        // /admin empieza a cargar y antes de terminar se vuelve a /games
        assert!(!tracker.should_skip("/admin"));
        let admin = tracker.begin("/admin");
        assert!(!tracker.should_skip("/games"));
        let back = tracker.begin("/games");

        assert_eq!(tracker.settle(admin, Ok::<_, ()>(ViewId::Admin)), Settled::Superseded);
        assert_eq!(tracker.settle(back, Ok::<_, ()>(ViewId::Games)), Settled::Render(ViewId::Games));
    }

    #[test]
    fn test_repeated_request_is_skipped() {
        let tracker = NavigationTracker::new();
        assert!(!tracker.should_skip("/reviews"));
        let token = tracker.begin("/reviews");
        assert!(tracker.should_skip("/reviews"));
        // sigue saltándose mientras carga y después de pintar
        assert_eq!(tracker.settle(token, Ok::<_, ()>(())), Settled::Render(()));
        assert!(tracker.should_skip("/reviews"));
    }

    #[test]
    fn test_overlapping_loads_render_only_last() {
        // terminan en orden de inicio
        let tracker = NavigationTracker::new();
        let a = tracker.begin("/games/1");
        let b = tracker.begin("/games/2");
        assert_eq!(tracker.settle(a, Ok::<_, ()>("1")), Settled::Superseded);
        assert_eq!(tracker.settle(b, Ok::<_, ()>("2")), Settled::Render("2"));

        // terminan en orden inverso
        let tracker = NavigationTracker::new();
        let a = tracker.begin("/games/1");
        let b = tracker.begin("/games/2");
        assert_eq!(tracker.settle(b, Ok::<_, ()>("2")), Settled::Render("2"));
        assert_eq!(tracker.settle(a, Ok::<_, ()>("1")), Settled::Superseded);
    }

    #[test]
    fn test_superseded_failure_is_silent() {
        let tracker = NavigationTracker::new();
        let stale = tracker.begin("/admin");
        let latest = tracker.begin("/reviews");

        let failed: Result<(), AppError> = Err(AppError::Dom("boom".to_string()));
        assert_eq!(tracker.settle(stale, failed.clone()), Settled::Superseded);
        assert_eq!(tracker.settle(latest, failed), Settled::Failed(AppError::Dom("boom".to_string())));
    }

    #[test]
    fn test_lazy_views_start_empty() {
        let views = LazyViews::new(Rc::new(BundledViewLoader));
        assert!(!views.is_loaded(ViewId::Games));
        assert!(views.cached(ViewId::Admin).is_none());
    }

    /// Loader síncrono que cuenta cuántas veces se llama
    struct CountingLoader {
        calls: Rc<Cell<usize>>,
    }

    impl ViewLoader for CountingLoader {
        fn load(&self, view: ViewId) -> LoadFuture {
            self.calls.set(self.calls.get() + 1);
            let loaded: Result<RenderFn, AppError> = Ok(view_renderer(view));
            Box::pin(std::future::ready(loaded))
        }
    }

    /// Ejecuta un future que termina sin esperar a nada
    fn poll_ready<F: Future>(fut: F) -> F::Output {
        use std::task::{Context, Poll, Waker};

        let mut cx = Context::from_waker(Waker::noop());
        let mut fut = Box::pin(fut);
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(out) => out,
            Poll::Pending => panic!("future pendiente"),
        }
    }

    #[test]
    fn test_view_loaded_once_then_cached() {
        let calls = Rc::new(Cell::new(0));
        let views = LazyViews::new(Rc::new(CountingLoader { calls: calls.clone() }));

        assert!(poll_ready(views.get_or_load(ViewId::GameDetail)).is_ok());
        assert!(poll_ready(views.get_or_load(ViewId::GameDetail)).is_ok());
        assert_eq!(calls.get(), 1);
        assert!(views.is_loaded(ViewId::GameDetail));
        assert!(!views.is_loaded(ViewId::Reviews));
    }
}
