pub mod endpoint_resolver;
pub mod toast_service;
pub mod theme_service;

pub use endpoint_resolver::*;
pub use toast_service::ToastService;
pub use theme_service::{install_theme, ThemePreset};
