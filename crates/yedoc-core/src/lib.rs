//! yedoc Core Types and Definitions
//!
//! This crate provides the foundational types for building yEd-compatible
//! GraphML documents. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Visual style definitions for nodes, edges and labels
//!   ([`draw`] module)
//!
//! None of these types hold document state or perform I/O; the document
//! registry, coordinate resolution and GraphML emission live in the `yedoc`
//! crate.

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
