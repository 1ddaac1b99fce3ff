//! Error types for yedoc operations.
//!
//! This module provides the main error type [`YedocError`] which covers
//! every failure condition the library surfaces: property validation,
//! registry integrity, build-time referential checks and the final file
//! write.
//!
//! All conditions are unrecoverable by the library and fail fast; the one
//! deliberate exception is removal of an absent entity, which the
//! [`Document`](crate::Document) treats as a successful no-op rather than an
//! error.

use std::io;

use thiserror::Error;

use yedoc_core::identifier::Id;

/// The main error type for yedoc operations.
#[derive(Debug, Error)]
pub enum YedocError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A property setter rejected a malformed value (negative size,
    /// unparsable color, empty label text and the like).
    #[error("Validation error: {0}")]
    Validation(String),

    /// An entity was registered under an id that is already held by a live
    /// node or edge.
    #[error("Duplicate id `{id}`")]
    DuplicateId { id: Id },

    /// An entity references another entity that is not registered in the
    /// same document.
    #[error("Entity `{entity}` references unregistered entity `{missing}`")]
    DanglingReference { entity: Id, missing: Id },

    /// A node's relative chain revisits itself. `hops` is the number of
    /// steps taken when the cycle was detected.
    #[error("Cyclic relative reference: node `{id}` reached again after {hops} hops")]
    CyclicReference { id: Id, hops: usize },

    /// A template was instantiated under a name that was never registered.
    #[error("Unknown template `{name}`")]
    UnknownTemplate { name: String },
}

impl From<String> for YedocError {
    /// Property-layer setters report plain message strings; lift them into
    /// [`YedocError::Validation`].
    fn from(message: String) -> Self {
        Self::Validation(message)
    }
}
