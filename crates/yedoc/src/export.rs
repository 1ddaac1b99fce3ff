//! Serialization of a [`Document`](crate::Document) to external formats.
//!
//! The only format currently implemented is yEd-flavored GraphML
//! ([`graphml::Graphml`]); the [`Exporter`] trait is the seam a further
//! format would plug into.

pub mod graphml;

use crate::{document::Document, error::YedocError};

/// An exporter renders a document into its output format and performs any
/// configured persistence, returning the rendered text.
pub trait Exporter {
    fn export_document(&self, document: &Document) -> Result<String, YedocError>;
}
