// ============================================================================
// ERRORES - Errores tipados de la aplicación
// ============================================================================

use wasm_bindgen::JsValue;
use crate::models::endpoint::{Operation, Resource};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Mount point not found: {selector}")]
    MountPointMissing { selector: String },

    #[error("Application already started")]
    AlreadyStarted,

    #[error("Missing parameter '{parameter}' for endpoint {endpoint}")]
    MissingParameter { endpoint: String, parameter: String },

    #[error("Endpoint {endpoint} takes no path parameter (got '{value}')")]
    UnexpectedParameter { endpoint: String, value: String },

    #[error("Unknown endpoint: {resource}.{operation}")]
    UnknownEndpoint { resource: Resource, operation: Operation },

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl AppError {
    /// Convertir un error de web-sys (JsValue) en AppError::Dom
    pub fn dom(err: JsValue) -> Self {
        AppError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
