//! Infrastructure Layer
//!
//! Reference implementations of the host collaborator traits.

pub mod memory;

pub use memory::{InMemorySessions, InMemoryStore};
