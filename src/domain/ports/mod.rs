//! Domain ports for the hexagonal boundary.

mod person_store;

#[cfg(test)]
pub use person_store::MockPersonStore;
pub use person_store::{PersonStore, PersonStoreError};
