pub mod endpoint;
pub mod game_filter;
pub mod route;
pub mod toast;

pub use endpoint::{EndpointDescriptor, HttpMethod, Operation, Resource};
pub use game_filter::GameFilter;
pub use route::{RouteDef, RouteMatch, ViewId};
pub use toast::{Severity, Toast};
