use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Identificador de vista (cada una se carga al primer uso)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Games,
    GameDetail,
    Reviews,
    Admin,
    NotFound,
}

impl ViewId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Games => "Games",
            ViewId::GameDetail => "GameDetail",
            ViewId::Reviews => "Reviews",
            ViewId::Admin => "Admin",
            ViewId::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definición estática de una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    /// Patrón con segmentos `:param`
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: ViewId,
}

/// Resultado de resolver un path contra la tabla de rutas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub path: String,
    pub name: Option<&'static str>,
    pub view: ViewId,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
