// ============================================================================
// ROUTES - Tabla estática de rutas + matcher
// ============================================================================

use std::collections::HashMap;
use crate::error::AppError;
use crate::models::route::{RouteDef, RouteMatch, ViewId};
use crate::utils::url::strip_query_and_fragment;

pub const GAME_DETAIL: &str = "game-detail";

static ROUTES: &[RouteDef] = &[
    RouteDef { path: "/", name: None, view: ViewId::Games },
    RouteDef { path: "/games", name: None, view: ViewId::Games },
    RouteDef { path: "/games/:id", name: Some(GAME_DETAIL), view: ViewId::GameDetail },
    RouteDef { path: "/reviews", name: None, view: ViewId::Reviews },
    RouteDef { path: "/admin", name: None, view: ViewId::Admin },
];

pub fn routes() -> &'static [RouteDef] {
    ROUTES
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Comparar un path contra un patrón; devuelve los params si coincide
fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_segments = segments(pattern);
    let path_segments = segments(path);
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (p, s) in pattern_segments.iter().zip(path_segments.iter()) {
        if let Some(name) = p.strip_prefix(':') {
            params.insert(name.to_string(), s.to_string());
        } else if p != s {
            return None;
        }
    }
    Some(params)
}

/// Resolver un path (query y fragment se ignoran). La primera ruta que coincide gana.
pub fn match_path(path: &str) -> Option<RouteMatch> {
    let path = strip_query_and_fragment(path);
    if path.contains("//") {
        return None;
    }
    ROUTES.iter().find_map(|route| {
        match_pattern(route.path, path).map(|params| RouteMatch {
            path: path.to_string(),
            name: route.name,
            view: route.view,
            params,
        })
    })
}

/// Path -> match, o NotFound si ninguna ruta coincide
pub fn match_or_not_found(path: &str) -> RouteMatch {
    match_path(path).unwrap_or_else(|| RouteMatch {
        path: strip_query_and_fragment(path).to_string(),
        name: None,
        view: ViewId::NotFound,
        params: HashMap::new(),
    })
}

/// Construir el path de una ruta con nombre (`game-detail` + id=42 -> `/games/42`)
pub fn resolve_named(name: &str, params: &[(&str, &str)]) -> Result<String, AppError> {
    let route = ROUTES
        .iter()
        .find(|r| r.name == Some(name))
        .ok_or_else(|| AppError::UnknownRoute(name.to_string()))?;

    let mut path = String::new();
    for segment in segments(route.path) {
        path.push('/');
        match segment.strip_prefix(':') {
            Some(param) => {
                let value = params
                    .iter()
                    .find(|(k, _)| *k == param)
                    .map(|(_, v)| *v)
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| AppError::MissingParameter {
                        endpoint: format!("route {}", name),
                        parameter: param.to_string(),
                    })?;
                path.push_str(value);
            }
            None => path.push_str(segment),
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_and_games_same_view() {
        let root = match_path("/").unwrap();
        let games = match_path("/games").unwrap();
        assert_eq!(root.view, ViewId::Games);
        assert_eq!(root.view, games.view);
    }

    #[test]
    fn test_game_detail_param() {
        let m = match_path("/games/42").unwrap();
        assert_eq!(m.view, ViewId::GameDetail);
        assert_eq!(m.name, Some("game-detail"));
        assert_eq!(m.param("id"), Some("42"));
    }

    #[test]
    fn test_other_routes() {
        assert_eq!(match_path("/reviews").unwrap().view, ViewId::Reviews);
        assert_eq!(match_path("/admin").unwrap().view, ViewId::Admin);
        assert_eq!(match_path("/admin/").unwrap().view, ViewId::Admin);
        assert_eq!(match_path("/reviews?page=2#top").unwrap().view, ViewId::Reviews);
    }

    #[test]
    fn test_unmatched_paths() {
        assert!(match_path("/games/42/edit").is_none());
        assert!(match_path("/unknown").is_none());
        assert!(match_path("//games").is_none());
        let nf = match_or_not_found("/nope?x=1");
        assert_eq!(nf.view, ViewId::NotFound);
        assert_eq!(nf.path, "/nope");
    }

    #[test]
    fn test_route_table() {
        assert_eq!(routes().len(), 5);
        assert_eq!(routes().iter().filter(|r| r.name.is_some()).count(), 1);
    }

    #[test]
    fn test_resolve_named() {
        assert_eq!(resolve_named(GAME_DETAIL, &[("id", "42")]).unwrap(), "/games/42");
        assert!(matches!(resolve_named(GAME_DETAIL, &[]), Err(AppError::MissingParameter { .. })));
        assert_eq!(resolve_named("home", &[]), Err(AppError::UnknownRoute("home".to_string())));
    }
}
