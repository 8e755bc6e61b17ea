// ============================================================================
// ENDPOINT - Descriptores de endpoints REST (tabla estática)
// ============================================================================

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::AppError;

/// Categoría de recurso del backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Games,
    Reviews,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Games => "games",
            Resource::Reviews => "reviews",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "games" => Ok(Resource::Games),
            "reviews" => Ok(Resource::Reviews),
            other => Err(AppError::UnknownResource(other.to_string())),
        }
    }
}

/// Operación lógica sobre un recurso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    List,
    Top,
    Recent,
    Genres,
    Platforms,
    Get,
    Create,
    Update,
    Delete,
    Cover,
    GameReviews,
    MyReviews,
}

impl Operation {
    /// Nombre lógico (el mismo que usan las vistas)
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Top => "top",
            Operation::Recent => "recent",
            Operation::Genres => "genres",
            Operation::Platforms => "platforms",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Cover => "cover",
            Operation::GameReviews => "gameReviews",
            Operation::MyReviews => "myReviews",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "list" => Operation::List,
            "top" => Operation::Top,
            "recent" => Operation::Recent,
            "genres" => Operation::Genres,
            "platforms" => Operation::Platforms,
            "get" => Operation::Get,
            "create" => Operation::Create,
            "update" => Operation::Update,
            "delete" => Operation::Delete,
            "cover" => Operation::Cover,
            "gameReviews" => Operation::GameReviews,
            "myReviews" => Operation::MyReviews,
            other => return Err(AppError::UnknownOperation(other.to_string())),
        };
        Ok(op)
    }
}

/// Método HTTP que espera el backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Segmento del path: literal o parámetro posicional requerido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Lit(&'static str),
    Param(&'static str),
}

/// Parámetro opcional de query con su clave en el wire y su default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    /// Nombre lógico (`pageSize`)
    pub name: &'static str,
    /// Clave en la URL (`page_size`)
    pub key: &'static str,
    pub default: u32,
}

impl QueryParam {
    const fn new(name: &'static str, key: &'static str, default: u32) -> Self {
        Self { name, key, default }
    }
}

/// Descriptor de un endpoint: (recurso, operación) + contrato de parámetros
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub resource: Resource,
    pub operation: Operation,
    pub method: HttpMethod,
    pub path: &'static [Segment],
    pub query: &'static [QueryParam],
}

impl EndpointDescriptor {
    /// Parámetros posicionales requeridos, en orden
    pub fn required_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.path.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(*name),
            Segment::Lit(_) => None,
        })
    }

    /// Nombre completo `games.get`, usado en errores y logs
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.resource, self.operation)
    }
}

use self::Segment::{Lit, Param};

const PAGE: QueryParam = QueryParam::new("page", "page", 1);
const LIMIT: QueryParam = QueryParam::new("limit", "limit", 10);
const GAMES_PAGE_SIZE: QueryParam = QueryParam::new("pageSize", "page_size", 20);
const REVIEWS_PAGE_SIZE: QueryParam = QueryParam::new("pageSize", "page_size", 10);

const fn endpoint(
    resource: Resource,
    operation: Operation,
    method: HttpMethod,
    path: &'static [Segment],
    query: &'static [QueryParam],
) -> EndpointDescriptor {
    EndpointDescriptor { resource, operation, method, path, query }
}

/// Tabla única de endpoints (games + reviews)
pub static ENDPOINTS: &[EndpointDescriptor] = &[
    // games
    endpoint(Resource::Games, Operation::List, HttpMethod::Get,
        &[Lit("games")], &[PAGE, GAMES_PAGE_SIZE]),
    endpoint(Resource::Games, Operation::Top, HttpMethod::Get,
        &[Lit("games"), Lit("top")], &[LIMIT]),
    endpoint(Resource::Games, Operation::Recent, HttpMethod::Get,
        &[Lit("games"), Lit("recent")], &[LIMIT]),
    endpoint(Resource::Games, Operation::Genres, HttpMethod::Get,
        &[Lit("games"), Lit("genres")], &[]),
    endpoint(Resource::Games, Operation::Platforms, HttpMethod::Get,
        &[Lit("games"), Lit("platforms")], &[]),
    endpoint(Resource::Games, Operation::Get, HttpMethod::Get,
        &[Lit("games"), Param("id")], &[]),
    endpoint(Resource::Games, Operation::Create, HttpMethod::Post,
        &[Lit("games")], &[]),
    endpoint(Resource::Games, Operation::Update, HttpMethod::Patch,
        &[Lit("games"), Param("id")], &[]),
    endpoint(Resource::Games, Operation::Delete, HttpMethod::Delete,
        &[Lit("games"), Param("id")], &[]),
    endpoint(Resource::Games, Operation::Cover, HttpMethod::Post,
        &[Lit("games"), Param("id"), Lit("cover")], &[]),
    // reviews
    endpoint(Resource::Reviews, Operation::List, HttpMethod::Get,
        &[Lit("reviews")], &[PAGE, REVIEWS_PAGE_SIZE]),
    endpoint(Resource::Reviews, Operation::Recent, HttpMethod::Get,
        &[Lit("reviews"), Lit("recent")], &[LIMIT]),
    endpoint(Resource::Reviews, Operation::GameReviews, HttpMethod::Get,
        &[Lit("reviews"), Lit("game"), Param("gameId")], &[]),
    endpoint(Resource::Reviews, Operation::Create, HttpMethod::Post,
        &[Lit("reviews")], &[]),
    endpoint(Resource::Reviews, Operation::Update, HttpMethod::Patch,
        &[Lit("reviews"), Param("id")], &[]),
    endpoint(Resource::Reviews, Operation::Delete, HttpMethod::Delete,
        &[Lit("reviews"), Param("id")], &[]),
    endpoint(Resource::Reviews, Operation::MyReviews, HttpMethod::Get,
        &[Lit("reviews"), Lit("me")], &[PAGE, REVIEWS_PAGE_SIZE]),
];

/// Buscar el descriptor de (recurso, operación)
pub fn descriptor(resource: Resource, operation: Operation) -> Result<&'static EndpointDescriptor, AppError> {
    ENDPOINTS
        .iter()
        .find(|d| d.resource == resource && d.operation == operation)
        .ok_or(AppError::UnknownEndpoint { resource, operation })
}
