//! Visual style definitions for yEd GraphML elements.
//!
//! This module provides the catalog of style value types that nodes, edges
//! and labels carry, together with their `y:*` markup emission:
//!
//! - [`ShapeKind`]: the closed catalog of `y:ShapeNode` shapes
//! - [`Fill`]: fill colors for node interiors (`y:Fill`)
//! - [`LineStyle`] / [`LineType`]: stroke styling for borders and edge lines
//!   (`y:BorderStyle`, `y:LineStyle`)
//! - [`Arrows`] / [`ArrowType`]: edge arrow decorations (`y:Arrows`)
//! - [`NodeLabel`] / [`EdgeLabel`]: label text, typography and positioning
//!   models (`y:NodeLabel`, `y:EdgeLabel`)
//!
//! All of these are plain values: cloning one yields a fully independent
//! copy, which is what the document-level template registries rely on.

pub mod arrow;
pub mod fill;
pub mod label;
pub mod line;
pub mod shape;

pub use arrow::{ArrowType, Arrows};
pub use fill::Fill;
pub use label::{
    Alignment, EdgeLabel, EdgeLabelModel, FontStyle, InternalPosition, NodeLabel, NodeLabelModel,
    SmartPosition,
};
pub use line::{LineStyle, LineType};
pub use shape::ShapeKind;

use svg::node::element::Element;

/// Type alias for boxed markup nodes.
pub type XmlNode = Box<dyn svg::Node>;

/// Builder-style helpers over the generic markup [`Element`].
///
/// The named element types of the `svg` crate generate their own `set`/`add`
/// builders; the generic [`Element`] used for `y:*` tags only exposes the
/// mutating [`svg::Node`] API. This trait restores the builder style for it.
pub trait ElementExt: Sized {
    /// Assigns an attribute, returning the element.
    fn with<U>(self, name: &str, value: U) -> Self
    where
        U: Into<svg::node::Value>;

    /// Appends a child node, returning the element.
    fn child<N>(self, node: N) -> Self
    where
        N: Into<XmlNode>;
}

impl ElementExt for Element {
    fn with<U>(mut self, name: &str, value: U) -> Self
    where
        U: Into<svg::node::Value>,
    {
        use svg::Node;
        self.assign(name, value);
        self
    }

    fn child<N>(mut self, node: N) -> Self
    where
        N: Into<XmlNode>,
    {
        use svg::Node;
        self.append(node);
        self
    }
}
