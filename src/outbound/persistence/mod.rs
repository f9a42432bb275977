//! Persistence adapters for the person store port.

mod in_memory;

pub use in_memory::InMemoryPersonStore;
