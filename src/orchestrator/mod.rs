pub mod probe;
pub mod router;

pub use probe::{ProbeError, detect};
pub use router::{RouteError, resolve, route, route_by_name};
