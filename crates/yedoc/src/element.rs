//! Document entities: nodes and edges.
//!
//! Entities are plain values owned by a [`Document`](crate::Document) and
//! looked up by [`Id`](yedoc_core::identifier::Id); they never hold pointers
//! to each other. Cross-references (an edge's endpoints, a node's relative
//! anchor) are ids, which is what keeps removal cascades and the build-time
//! referential checks honest.

pub mod edge;
pub mod node;

pub use edge::{ArcSettings, ArcType, Edge, EdgeKind};
pub use node::{GenericNode, Node, ShapeNode};
