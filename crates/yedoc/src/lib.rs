//! yedoc - A programmatic builder for yEd-compatible GraphML documents.
//!
//! Build a [`Document`] out of nodes, edges and labels, position nodes
//! relative to one another, chain edge waypoints from the source anchor,
//! and serialize the whole graph into the GraphML dialect the
//! [yEd](https://www.yworks.com/products/yed) editor loads.
//!
//! # Examples
//!
//! ```
//! use yedoc::{Document, Edge, ShapeNode};
//! use yedoc::draw::{NodeLabel, ShapeKind};
//! use yedoc::identifier::Id;
//!
//! let mut doc = Document::new();
//!
//! let gateway = ShapeNode::new(Id::new("gateway")).with_shape(ShapeKind::RoundRectangle);
//! doc.add_node(gateway).unwrap();
//! doc.node_mut(Id::new("gateway")).unwrap().set_position(100.0, 50.0);
//!
//! // Positioned 80 to the right of the gateway, wherever it moves
//! doc.add_node(ShapeNode::new(Id::new("db"))).unwrap();
//! let db = doc.node_mut(Id::new("db")).unwrap();
//! db.set_position(80.0, 0.0);
//! db.set_relative(Some(Id::new("gateway"))).unwrap();
//! db.add_label(NodeLabel::new("DB").unwrap());
//!
//! doc.add_edge(Edge::new(Id::new("e1"), Id::new("gateway"), Id::new("db"))).unwrap();
//!
//! let xml = doc.build().unwrap();
//! assert!(xml.contains("<graphml"));
//! ```

mod document;
mod element;
mod error;
pub mod export;
mod resolve;

pub use yedoc_core::{color, draw, geometry, identifier};

pub use document::Document;
pub use element::{ArcSettings, ArcType, Edge, EdgeKind, GenericNode, Node, ShapeNode};
pub use error::YedocError;
