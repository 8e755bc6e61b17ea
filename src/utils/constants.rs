/// URL base de la API cuando `API_BASE_URL` no está definida
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// ID del elemento donde se monta la aplicación
pub const MOUNT_ID: &str = "app";

/// ID del contenedor global de toasts
pub const TOAST_ELEMENT_ID: &str = "app-toast";

/// ID del outlet donde el router renderiza la vista actual
pub const ROUTER_OUTLET_ID: &str = "router-view";

/// Atributo que marca los links manejados por el router
pub const ROUTER_LINK_ATTR: &str = "data-link";
