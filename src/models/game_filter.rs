use serde::{Deserialize, Serialize};

/// Filtros opcionales del listado de juegos (mismos nombres que el backend)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameFilter {
    pub q: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub developer: Option<String>,
    pub min_year: Option<u16>,
    pub max_year: Option<u16>,
    pub min_rating: Option<f32>,
    pub max_rating: Option<f32>,
}

impl GameFilter {
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Pares (clave, valor) sin codificar, en el orden que se añaden a la URL.
    /// Solo incluye los filtros definidos.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            pairs.push(("q", q.to_string()));
        }
        if !self.genres.is_empty() {
            pairs.push(("genres", self.genres.join(",")));
        }
        if !self.platforms.is_empty() {
            pairs.push(("platforms", self.platforms.join(",")));
        }
        if let Some(dev) = self.developer.as_deref().filter(|d| !d.is_empty()) {
            pairs.push(("developer", dev.to_string()));
        }
        if let Some(y) = self.min_year {
            pairs.push(("min_year", y.to_string()));
        }
        if let Some(y) = self.max_year {
            pairs.push(("max_year", y.to_string()));
        }
        if let Some(r) = self.min_rating {
            pairs.push(("min_rating", r.to_string()));
        }
        if let Some(r) = self.max_rating {
            pairs.push(("max_rating", r.to_string()));
        }
        pairs
    }
}
