// ============================================================================
// ENDPOINT RESOLVER - Construcción de URLs de la API (sin red)
// ============================================================================
// Convierte (recurso, operación, parámetros) en la URL exacta que deben usar
// las vistas. NO hace requests HTTP.
// ============================================================================

use std::collections::HashMap;
use std::fmt::Display;
use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::endpoint::{descriptor, EndpointDescriptor, Operation, Resource, Segment};
use crate::models::GameFilter;
use crate::utils::url::encode_query_value;

/// Valores de parámetros por nombre lógico (`id`, `gameId`, `page`, `pageSize`, `limit`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Display) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Display) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Solo establece el valor si existe (para opcionales)
    pub fn with_opt(self, name: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Resolver de endpoints - stateless sobre la URL base configurada
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointResolver {
    base_url: String,
}

impl EndpointResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolver sobre la URL base global (leída una vez al arrancar)
    pub fn from_config() -> Self {
        Self::new(CONFIG.api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolver (recurso, operación) con validación de requeridos
    pub fn resolve(
        &self,
        resource: Resource,
        operation: Operation,
        params: &Params,
    ) -> Result<String, AppError> {
        let endpoint = descriptor(resource, operation)?;
        self.render(endpoint, params, &[])
    }

    /// Variante por nombres lógicos (`"reviews"`, `"gameReviews"`).
    /// `id` se asigna al primer parámetro requerido del endpoint; pasarlo a un
    /// endpoint sin parámetros es un error.
    pub fn resolve_by_name(
        &self,
        resource: &str,
        operation: &str,
        id: Option<&str>,
    ) -> Result<String, AppError> {
        let endpoint = descriptor(resource.parse()?, operation.parse()?)?;
        let mut params = Params::new();
        match (endpoint.required_params().next(), id) {
            (Some(name), Some(id)) => params.set(name, id),
            (None, Some(id)) => {
                return Err(AppError::UnexpectedParameter {
                    endpoint: endpoint.qualified_name(),
                    value: id.to_string(),
                });
            }
            (_, None) => {}
        }
        self.render(endpoint, &params, &[])
    }

    pub fn games(&self) -> GameEndpoints<'_> {
        GameEndpoints { resolver: self }
    }

    pub fn reviews(&self) -> ReviewEndpoints<'_> {
        ReviewEndpoints { resolver: self }
    }

    fn render(
        &self,
        endpoint: &EndpointDescriptor,
        params: &Params,
        extra_query: &[(&'static str, String)],
    ) -> Result<String, AppError> {
        let mut url = self.base_url.clone();

        for segment in endpoint.path {
            url.push('/');
            match segment {
                Segment::Lit(lit) => url.push_str(lit),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.trim().is_empty())
                        .ok_or_else(|| AppError::MissingParameter {
                            endpoint: endpoint.qualified_name(),
                            parameter: name.to_string(),
                        })?;
                    url.push_str(value);
                }
            }
        }

        let defaults = endpoint.query.iter().map(|q| {
            let value = params
                .get(q.name)
                .map(str::to_string)
                .unwrap_or_else(|| q.default.to_string());
            (q.key, value)
        });

        let mut separator = '?';
        for (key, value) in defaults.chain(extra_query.iter().cloned()) {
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&encode_query_value(&value));
            separator = '&';
        }

        log::trace!("🔗 {} {} -> {}", endpoint.method.as_str(), endpoint.qualified_name(), url);
        Ok(url)
    }
}

/// Endpoints de juegos
pub struct GameEndpoints<'a> {
    resolver: &'a EndpointResolver,
}

impl GameEndpoints<'_> {
    fn resolve(&self, operation: Operation, params: Params) -> Result<String, AppError> {
        self.resolver.resolve(Resource::Games, operation, &params)
    }

    pub fn list(&self, page: Option<u32>, page_size: Option<u32>) -> Result<String, AppError> {
        self.resolve(
            Operation::List,
            Params::new().with_opt("page", page).with_opt("pageSize", page_size),
        )
    }

    /// Listado con filtros (se añaden después de page/page_size)
    pub fn list_filtered(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
        filter: &GameFilter,
    ) -> Result<String, AppError> {
        let endpoint = descriptor(Resource::Games, Operation::List)?;
        let params = Params::new().with_opt("page", page).with_opt("pageSize", page_size);
        self.resolver.render(endpoint, &params, &filter.query_pairs())
    }

    pub fn top(&self, limit: Option<u32>) -> Result<String, AppError> {
        self.resolve(Operation::Top, Params::new().with_opt("limit", limit))
    }

    pub fn recent(&self, limit: Option<u32>) -> Result<String, AppError> {
        self.resolve(Operation::Recent, Params::new().with_opt("limit", limit))
    }

    pub fn genres(&self) -> Result<String, AppError> {
        self.resolve(Operation::Genres, Params::new())
    }

    pub fn platforms(&self) -> Result<String, AppError> {
        self.resolve(Operation::Platforms, Params::new())
    }

    pub fn get(&self, id: impl Display) -> Result<String, AppError> {
        self.resolve(Operation::Get, Params::new().with("id", id))
    }

    pub fn create(&self) -> Result<String, AppError> {
        self.resolve(Operation::Create, Params::new())
    }

    pub fn update(&self, id: impl Display) -> Result<String, AppError> {
        self.resolve(Operation::Update, Params::new().with("id", id))
    }

    pub fn delete(&self, id: impl Display) -> Result<String, AppError> {
        self.resolve(Operation::Delete, Params::new().with("id", id))
    }

    pub fn cover(&self, id: impl Display) -> Result<String, AppError> {
        self.resolve(Operation::Cover, Params::new().with("id", id))
    }
}

/// Endpoints de reseñas
pub struct ReviewEndpoints<'a> {
    resolver: &'a EndpointResolver,
}

impl ReviewEndpoints<'_> {
    fn resolve(&self, operation: Operation, params: Params) -> Result<String, AppError> {
        self.resolver.resolve(Resource::Reviews, operation, &params)
    }

    pub fn list(&self, page: Option<u32>, page_size: Option<u32>) -> Result<String, AppError> {
        self.resolve(
            Operation::List,
            Params::new().with_opt("page", page).with_opt("pageSize", page_size),
        )
    }

    pub fn recent(&self, limit: Option<u32>) -> Result<String, AppError> {
        self.resolve(Operation::Recent, Params::new().with_opt("limit", limit))
    }

    pub fn game_reviews(&self, game_id: impl Display) -> Result<String, AppError> {
        self.resolve(Operation::GameReviews, Params::new().with("gameId", game_id))
    }

    pub fn create(&self) -> Result<String, AppError> {
        self.resolve(Operation::Create, Params::new())
    }

    pub fn update(&self, id: impl Display) -> Result<String, AppError> {
        self.resolve(Operation::Update, Params::new().with("id", id))
    }

    pub fn delete(&self, id: impl Display) -> Result<String, AppError> {
        self.resolve(Operation::Delete, Params::new().with("id", id))
    }

    pub fn my_reviews(&self, page: Option<u32>, page_size: Option<u32>) -> Result<String, AppError> {
        self.resolve(
            Operation::MyReviews,
            Params::new().with_opt("page", page).with_opt("pageSize", page_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::endpoint::{HttpMethod, ENDPOINTS};

    const BASE: &str = "http://localhost:8000/api";

    fn resolver() -> EndpointResolver {
        EndpointResolver::new(BASE)
    }

    #[test]
    fn test_games_endpoints() {
        let r = resolver();
        let games = r.games();
        assert_eq!(games.list(Some(3), Some(50)).unwrap(), format!("{BASE}/games?page=3&page_size=50"));
        assert_eq!(games.top(Some(5)).unwrap(), format!("{BASE}/games/top?limit=5"));
        assert_eq!(games.recent(Some(3)).unwrap(), format!("{BASE}/games/recent?limit=3"));
        assert_eq!(games.genres().unwrap(), format!("{BASE}/games/genres"));
        assert_eq!(games.platforms().unwrap(), format!("{BASE}/games/platforms"));
        assert_eq!(games.get(7).unwrap(), format!("{BASE}/games/7"));
        assert_eq!(games.create().unwrap(), format!("{BASE}/games"));
        assert_eq!(games.update(7).unwrap(), format!("{BASE}/games/7"));
        assert_eq!(games.delete(7).unwrap(), format!("{BASE}/games/7"));
        assert_eq!(games.cover(7).unwrap(), format!("{BASE}/games/7/cover"));
    }

    #[test]
    fn test_reviews_endpoints() {
        let r = resolver();
        let reviews = r.reviews();
        assert_eq!(reviews.list(Some(2), Some(25)).unwrap(), format!("{BASE}/reviews?page=2&page_size=25"));
        assert_eq!(reviews.recent(Some(4)).unwrap(), format!("{BASE}/reviews/recent?limit=4"));
        assert_eq!(reviews.game_reviews(7).unwrap(), format!("{BASE}/reviews/game/7"));
        assert_eq!(reviews.create().unwrap(), format!("{BASE}/reviews"));
        assert_eq!(reviews.update(9).unwrap(), format!("{BASE}/reviews/9"));
        assert_eq!(reviews.delete(9).unwrap(), format!("{BASE}/reviews/9"));
        assert_eq!(reviews.my_reviews(Some(2), Some(5)).unwrap(), format!("{BASE}/reviews/me?page=2&page_size=5"));
    }

    #[test]
    fn test_optional_defaults() {
        let r = resolver();
        assert_eq!(r.games().list(None, None).unwrap(), format!("{BASE}/games?page=1&page_size=20"));
        assert_eq!(r.games().top(None).unwrap(), format!("{BASE}/games/top?limit=10"));
        assert_eq!(r.games().recent(None).unwrap(), format!("{BASE}/games/recent?limit=10"));
        assert_eq!(r.reviews().list(None, None).unwrap(), format!("{BASE}/reviews?page=1&page_size=10"));
        assert_eq!(r.reviews().recent(None).unwrap(), format!("{BASE}/reviews/recent?limit=10"));
        assert_eq!(r.reviews().my_reviews(None, None).unwrap(), format!("{BASE}/reviews/me?page=1&page_size=10"));
        // solo uno de los dos opcionales
        assert_eq!(r.games().list(Some(4), None).unwrap(), format!("{BASE}/games?page=4&page_size=20"));
    }

    #[test]
    fn test_base_change_only_changes_prefix() {
        let local = resolver();
        let prod = EndpointResolver::new("https://gamehub.example/api/");
        assert_eq!(prod.base_url(), "https://gamehub.example/api");

        let pairs = [
            (local.games().list(None, None).unwrap(), prod.games().list(None, None).unwrap()),
            (local.games().cover(1).unwrap(), prod.games().cover(1).unwrap()),
            (local.reviews().game_reviews(3).unwrap(), prod.reviews().game_reviews(3).unwrap()),
        ];
        for (a, b) in pairs {
            assert_eq!(a.strip_prefix(BASE), b.strip_prefix("https://gamehub.example/api"));
        }
    }

    #[test]
    fn test_missing_required_param_fails() {
        let r = resolver();
        let err = r.resolve(Resource::Games, Operation::Get, &Params::new()).unwrap_err();
        assert_eq!(
            err,
            AppError::MissingParameter {
                endpoint: "games.get".to_string(),
                parameter: "id".to_string()
            }
        );

        let err = r
            .resolve(Resource::Reviews, Operation::GameReviews, &Params::new().with("gameId", " "))
            .unwrap_err();
        assert!(matches!(err, AppError::MissingParameter { ref parameter, .. } if parameter == "gameId"));
    }

    #[test]
    fn test_unknown_endpoint() {
        let err = resolver()
            .resolve(Resource::Games, Operation::MyReviews, &Params::new())
            .unwrap_err();
        assert_eq!(
            err,
            AppError::UnknownEndpoint {
                resource: Resource::Games,
                operation: Operation::MyReviews
            }
        );
    }

    #[test]
    fn test_resolve_by_name() {
        let r = resolver();
        assert_eq!(r.resolve_by_name("reviews", "gameReviews", Some("7")).unwrap(), format!("{BASE}/reviews/game/7"));
        assert_eq!(r.resolve_by_name("games", "top", None).unwrap(), format!("{BASE}/games/top?limit=10"));
        assert!(matches!(r.resolve_by_name("games", "get", None), Err(AppError::MissingParameter { .. })));
        assert_eq!(r.resolve_by_name("users", "list", None), Err(AppError::UnknownResource("users".to_string())));
        assert_eq!(r.resolve_by_name("games", "purge", None), Err(AppError::UnknownOperation("purge".to_string())));
    }

    #[test]
    fn test_resolve_by_name_rejects_unused_id() {
        let r = EndpointResolver::new(BASE);
        assert_eq!(
            r.resolve_by_name("games", "list", Some("3")),
            Err(AppError::UnexpectedParameter {
                endpoint: "games.list".to_string(),
                value: "3".to_string(),
            })
        );
        assert!(matches!(r.resolve_by_name("reviews", "myReviews", Some("1")), Err(AppError::UnexpectedParameter { .. })));
    }

    #[test]
    fn test_list_filtered_appends_after_paging() {
        let filter = GameFilter {
            q: Some("witcher 3".to_string()),
            genres: vec!["RPG".to_string(), "Action".to_string()],
            min_year: Some(2010),
            ..Default::default()
        };
        assert_eq!(
            resolver().games().list_filtered(None, None, &filter).unwrap(),
            format!("{BASE}/games?page=1&page_size=20&q=witcher%203&genres=RPG%2CAction&min_year=2010")
        );
        assert_eq!(
            resolver().games().list_filtered(Some(2), None, &GameFilter::default()).unwrap(),
            format!("{BASE}/games?page=2&page_size=20")
        );
    }

    #[test]
    fn test_descriptor_table_is_unique_and_typed() {
        for (i, a) in ENDPOINTS.iter().enumerate() {
            for b in &ENDPOINTS[i + 1..] {
                assert!(!(a.resource == b.resource && a.operation == b.operation), "duplicado: {}", a.qualified_name());
            }
        }
        assert_eq!(ENDPOINTS.len(), 17);
        assert_eq!(descriptor(Resource::Games, Operation::Update).unwrap().method, HttpMethod::Patch);
        assert_eq!(descriptor(Resource::Reviews, Operation::Delete).unwrap().method, HttpMethod::Delete);
        let required: Vec<_> = descriptor(Resource::Reviews, Operation::GameReviews).unwrap().required_params().collect();
        assert_eq!(required, vec!["gameId"]);
    }
}
