//! Defines the data structures and models used throughout the application.
//!
//! This covers the snapshot operation vocabulary: operation tags, validated
//! per-operation request records, and the opaque result handed back by the
//! channel service.

mod snapshot;

pub use snapshot::*;
