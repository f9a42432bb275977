//! People service library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
