//! Command handlers.
//!
//! Handlers are thin wrappers that take the collected metadata, do any
//! CLI-specific input parsing, and format output onto the given writer.

pub mod get;
pub mod keys;
pub mod show;
