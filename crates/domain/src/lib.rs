//! Domain layer for Tenki
//!
//! Contains the weather model, value objects and domain errors.
//! This layer has no I/O and defines the vocabulary shared by every other crate.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::{DomainError, FetchError};
pub use value_objects::*;
