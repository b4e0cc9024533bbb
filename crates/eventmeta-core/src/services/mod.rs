//! Core services.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete probe implementations.

mod metadata_cache;

pub use metadata_cache::EventMetadataCache;
