//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on the domain port and stay testable without real I/O.

use std::sync::Arc;

use crate::domain::ports::PersonStore;

/// Dependency bundle for the people handlers.
#[derive(Clone)]
pub struct HttpState {
    pub people: Arc<dyn PersonStore>,
}

impl HttpState {
    /// Construct state around a person store implementation.
    #[must_use]
    pub fn new(people: Arc<dyn PersonStore>) -> Self {
        Self { people }
    }
}
