//! Port abstraction for the person store and its errors.
//!
//! Inbound adapters depend on this trait instead of any concrete storage so
//! tests can substitute a mock and a persistence backend can replace the
//! in-memory adapter without touching the pipeline.

use async_trait::async_trait;

use crate::domain::person::{Person, PersonDraft, PersonId};

/// Failures raised by person store adapters.
///
/// Distinct from "no such id": lookups signal absence with `Ok(None)` and
/// reserve this type for unexpected execution failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonStoreError {
    /// Query or mutation failed during execution.
    #[error("person store query failed: {message}")]
    Query { message: String },
}

impl PersonStoreError {
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for the ordered collection of person records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Return every person in insertion order.
    async fn list(&self) -> Result<Vec<Person>, PersonStoreError>;

    /// Fetch a person by identifier. `Ok(None)` means no such id.
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonStoreError>;

    /// Insert a validated draft, assigning a fresh unique identifier.
    async fn insert(&self, draft: PersonDraft) -> Result<Person, PersonStoreError>;

    /// Remove a person by identifier, returning the removed record when it
    /// existed.
    async fn remove(&self, id: PersonId) -> Result<Option<Person>, PersonStoreError>;
}
