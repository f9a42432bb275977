//! Shared pre-resolution step for routes addressing one person.
//!
//! View-one and delete need "find person by id or fail" with identical
//! failure semantics, so the lookup and its outcome mapping live here once
//! rather than duplicated per handler.

use crate::domain::person::{Person, PersonId};
use crate::domain::ports::{PersonStore, PersonStoreError};

/// Result of resolving a raw path parameter against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// The identifier matched a stored person.
    Found(Person),
    /// The identifier parsed but no person carries it.
    NotFound,
    /// The identifier was absent or not parseable as an integer.
    MalformedRequest,
}

/// Resolve a raw identifier into a person or a typed failure.
///
/// Store failures propagate as `Err` so the adapter can surface them as
/// internal errors; they are never conflated with
/// [`ResolutionOutcome::NotFound`].
pub async fn resolve_person(
    raw_id: Option<&str>,
    store: &dyn PersonStore,
) -> Result<ResolutionOutcome, PersonStoreError> {
    let Some(id) = raw_id.and_then(PersonId::parse) else {
        return Ok(ResolutionOutcome::MalformedRequest);
    };
    Ok(match store.find_by_id(id).await? {
        Some(person) => ResolutionOutcome::Found(person),
        None => ResolutionOutcome::NotFound,
    })
}
