// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::config::AppConfig;
use crate::models::route::RouteMatch;
use crate::services::{EndpointResolver, ToastService};
use crate::state::ReactiveState;

/// Estado compartido por el router y las vistas (clones baratos, Rc internos)
#[derive(Clone)]
pub struct AppState {
    pub resolver: EndpointResolver,
    pub toasts: ToastService,
    pub current_route: ReactiveState<Option<RouteMatch>>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            resolver: EndpointResolver::new(config.api_base_url()),
            toasts: ToastService::new(config.toast_life_ms),
            current_route: ReactiveState::new(None),
        }
    }
}
