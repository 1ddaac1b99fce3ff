//! Node entities and their `y:*Node` realizers.
//!
//! A node is a positionable entity: it has an upper-left corner, a size, a
//! stacking layer and optionally a relative anchor (the id of another node
//! its coordinates are offsets from). The two concrete kinds are
//! [`ShapeNode`] (one of the built-in yEd shapes) and [`GenericNode`] (a
//! yWorks configuration name, e.g. the flowchart palette); [`Node`] is the
//! closed sum of both.

use svg::node::element::Element;

use yedoc_core::{
    draw::{ElementExt, Fill, LineStyle, NodeLabel, ShapeKind},
    geometry::{Point, Size},
    identifier::Id,
};

/// State shared by every node kind.
#[derive(Debug, Clone, PartialEq)]
struct NodeCore {
    id: Id,
    position: Point,
    size: Size,
    layer: u32,
    relative: Option<Id>,
    fill: Fill,
    border: LineStyle,
    labels: Vec<NodeLabel>,
}

impl NodeCore {
    fn new(id: Id) -> Self {
        Self {
            id,
            position: Point::default(),
            size: Size::default(),
            layer: 0,
            relative: None,
            fill: Fill::default(),
            border: LineStyle::default(),
            labels: Vec::new(),
        }
    }

    /// Renders the geometry block with the given resolved absolute origin.
    fn render_geometry(&self, origin: Point) -> Element {
        Element::new("y:Geometry")
            .with("height", self.size.height())
            .with("width", self.size.width())
            .with("x", origin.x())
            .with("y", origin.y())
    }
}

/// A node drawn as one of the built-in yEd shapes.
///
/// # Examples
///
/// ```
/// use yedoc::{Node, ShapeNode};
/// use yedoc::draw::ShapeKind;
/// use yedoc::identifier::Id;
///
/// let mut node = Node::from(ShapeNode::new(Id::new("gateway")).with_shape(ShapeKind::Ellipse));
/// node.set_position(100.0, 50.0);
/// assert_eq!(node.x(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    core: NodeCore,
    shape: ShapeKind,
}

impl ShapeNode {
    /// Creates a rectangle node at the origin with yEd's default size and
    /// styling.
    pub fn new(id: Id) -> Self {
        Self {
            core: NodeCore::new(id),
            shape: ShapeKind::default(),
        }
    }

    /// Sets the shape (builder style).
    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    /// The drawn shape.
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Sets the drawn shape.
    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.shape = shape;
    }
}

/// A node drawn through a yWorks generic realizer configuration, such as the
/// flowchart or BPMN palettes.
///
/// # Examples
///
/// ```
/// use yedoc::GenericNode;
/// use yedoc::identifier::Id;
///
/// let start = GenericNode::new(Id::new("start"), "com.yworks.flowchart.start1");
/// assert_eq!(start.configuration(), "com.yworks.flowchart.start1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenericNode {
    core: NodeCore,
    configuration: String,
}

impl GenericNode {
    /// Creates a generic node with the given realizer configuration name.
    pub fn new(id: Id, configuration: &str) -> Self {
        Self {
            core: NodeCore::new(id),
            configuration: configuration.to_string(),
        }
    }

    /// The yWorks configuration name.
    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    /// Sets the yWorks configuration name.
    pub fn set_configuration(&mut self, configuration: &str) {
        self.configuration = configuration.to_string();
    }
}

/// A positionable document entity, the closed sum of all node kinds.
///
/// All shared state (position, size, layer, relative anchor, fill, border,
/// labels) is accessed through the methods on this enum; the kind-specific
/// state lives on the variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Shape(ShapeNode),
    Generic(GenericNode),
}

impl Node {
    fn core(&self) -> &NodeCore {
        match self {
            Self::Shape(node) => &node.core,
            Self::Generic(node) => &node.core,
        }
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        match self {
            Self::Shape(node) => &mut node.core,
            Self::Generic(node) => &mut node.core,
        }
    }

    /// The document-unique identifier, immutable after creation.
    pub fn id(&self) -> Id {
        self.core().id
    }

    /// Replaces the id. Only the document registry may do this, when
    /// instantiating templates.
    pub(crate) fn set_id(&mut self, id: Id) {
        self.core_mut().id = id;
    }

    /// The stored position: the upper-left corner, relative to the anchor
    /// node when one is set, absolute otherwise.
    pub fn position(&self) -> Point {
        self.core().position
    }

    /// The stored x-coordinate.
    pub fn x(&self) -> f64 {
        self.core().position.x()
    }

    /// The stored y-coordinate.
    pub fn y(&self) -> f64 {
        self.core().position.y()
    }

    /// Sets the stored position.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.core_mut().position = Point::new(x, y);
    }

    /// Sets the stored x-coordinate.
    pub fn set_x(&mut self, x: f64) {
        let core = self.core_mut();
        core.position = core.position.with_x(x);
    }

    /// Sets the stored y-coordinate.
    pub fn set_y(&mut self, y: f64) {
        let core = self.core_mut();
        core.position = core.position.with_y(y);
    }

    /// The bounding-box size.
    pub fn size(&self) -> Size {
        self.core().size
    }

    /// Sets the bounding-box size. Negative dimensions are rejected and
    /// leave the old size in place.
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), String> {
        if width < 0.0 || height < 0.0 {
            return Err(format!(
                "node dimensions must be non-negative, got {width}x{height}"
            ));
        }
        self.core_mut().size = Size::new(width, height);
        Ok(())
    }

    /// The stacking layer. Higher layers are emitted later and thus drawn
    /// in front.
    pub fn layer(&self) -> u32 {
        self.core().layer
    }

    /// Sets the stacking layer.
    pub fn set_layer(&mut self, layer: u32) {
        self.core_mut().layer = layer;
    }

    /// The id of the node this node's coordinates are relative to, if any.
    pub fn relative(&self) -> Option<Id> {
        self.core().relative
    }

    /// Anchors this node's coordinates to another node (or detaches it with
    /// `None`). Direct self-reference is rejected; transitive cycles are
    /// caught when coordinates are resolved.
    pub fn set_relative(&mut self, relative: Option<Id>) -> Result<(), String> {
        if relative == Some(self.id()) {
            return Err(format!("node `{}` cannot be relative to itself", self.id()));
        }
        self.core_mut().relative = relative;
        Ok(())
    }

    /// Detaches the relative anchor without touching the stored
    /// coordinates. The registry uses this when freezing dependents of a
    /// removed anchor node.
    pub(crate) fn clear_relative(&mut self) {
        self.core_mut().relative = None;
    }

    /// The interior fill.
    pub fn fill(&self) -> &Fill {
        &self.core().fill
    }

    /// Mutable access to the interior fill.
    pub fn fill_mut(&mut self) -> &mut Fill {
        &mut self.core_mut().fill
    }

    /// The border stroke.
    pub fn border(&self) -> &LineStyle {
        &self.core().border
    }

    /// Mutable access to the border stroke.
    pub fn border_mut(&mut self) -> &mut LineStyle {
        &mut self.core_mut().border
    }

    /// The attached labels, in attachment order.
    pub fn labels(&self) -> &[NodeLabel] {
        &self.core().labels
    }

    /// Mutable access to the attached labels.
    pub fn labels_mut(&mut self) -> &mut Vec<NodeLabel> {
        &mut self.core_mut().labels
    }

    /// Attaches a label.
    pub fn add_label(&mut self, label: NodeLabel) {
        self.core_mut().labels.push(label);
    }

    /// Returns the shape node, if this is one.
    pub fn as_shape_mut(&mut self) -> Option<&mut ShapeNode> {
        match self {
            Self::Shape(node) => Some(node),
            Self::Generic(_) => None,
        }
    }

    /// Returns the generic node, if this is one.
    pub fn as_generic_mut(&mut self) -> Option<&mut GenericNode> {
        match self {
            Self::Shape(_) => None,
            Self::Generic(node) => Some(node),
        }
    }

    /// Renders the `y:ShapeNode`/`y:GenericNode` realizer subtree.
    ///
    /// `origin` is the resolved absolute upper-left corner; resolution
    /// through relative chains happens in the document's coordinate
    /// resolver, never here.
    pub(crate) fn render_realizer(&self, origin: Point) -> Element {
        let core = self.core();
        let mut realizer = match self {
            Self::Shape(_) => Element::new("y:ShapeNode"),
            Self::Generic(node) => {
                Element::new("y:GenericNode").with("configuration", node.configuration.as_str())
            }
        };
        realizer = realizer
            .child(core.render_geometry(origin))
            .child(core.fill.render())
            .child(core.border.render("y:BorderStyle"));
        for label in &core.labels {
            realizer = realizer.child(label.render());
        }
        if let Self::Shape(node) = self {
            realizer = realizer.child(Element::new("y:Shape").with("type", node.shape.to_yed_value()));
        }
        realizer
    }
}

impl From<ShapeNode> for Node {
    fn from(node: ShapeNode) -> Self {
        Self::Shape(node)
    }
}

impl From<GenericNode> for Node {
    fn from(node: GenericNode) -> Self {
        Self::Generic(node)
    }
}
