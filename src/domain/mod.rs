//! Domain primitives and the request-resolution pipeline core.
//!
//! Purpose: define the strongly typed person entity, the declarative
//! validation policy applied to untyped payloads, and the shared
//! pre-resolution step used by every route that addresses one person.
//! Keep types immutable and document invariants in each type's Rustdoc.

pub mod error;
pub mod person;
pub mod ports;
pub mod resolution;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::person::{Person, PersonDraft, PersonId};
pub use self::resolution::{resolve_person, ResolutionOutcome};
pub use self::validation::{validate_person, FieldErrors, ValidationOutcome};
