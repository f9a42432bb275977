//! Person data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned person identifier.
///
/// Identifiers are never supplied by callers: the store allocates one at
/// insertion time and it is immutable afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    /// Wrap an already-allocated identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse a raw path parameter into an identifier.
    ///
    /// Returns `None` when the input is not an integer, leaving the caller
    /// to treat the request as malformed.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }

    /// Access the underlying integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Person record held by the store.
///
/// ## Invariants
/// - `id` is unique within the store and assigned at insertion.
/// - `name` is non-empty and `age` is finite; both are guaranteed by the
///   validation boundary because records are only built from a
///   [`PersonDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    #[schema(value_type = i64, example = 1)]
    pub id: PersonId,
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = 30)]
    pub age: f64,
}

impl Person {
    /// Attach a store-assigned identifier to a validated draft.
    #[must_use]
    pub fn from_draft(id: PersonId, draft: PersonDraft) -> Self {
        let PersonDraft { name, age } = draft;
        Self { id, name, age }
    }
}

/// Validated person payload awaiting insertion.
///
/// Carries only the declared fields: unknown payload keys were stripped
/// during validation, and the identifier is absent because the store
/// assigns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonDraft {
    pub name: String,
    pub age: f64,
}
