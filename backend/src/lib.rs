//! Users service library: a CRUD HTTP API over a single PostgreSQL table.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::{JsonContentType, Trace};
