//! Edge entities and their `y:*Edge` realizers.
//!
//! An edge connects two registered nodes by id and carries an ordered
//! waypoint list describing its path. Waypoints are either absolute
//! coordinates or, when the `relative_waypoints` flag is set, offsets
//! chained from the source anchor; the two modes never mix within one edge.

use std::str::FromStr;

use svg::node::element::Element;

use yedoc_core::{
    draw::{Arrows, EdgeLabel, ElementExt, LineStyle},
    geometry::Point,
    identifier::Id,
};

/// How an arc edge interprets its height and ratio.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcType {
    /// Height follows from the ratio (yEd's default).
    #[default]
    FixedRatio,
    /// Ratio follows from the height.
    FixedHeight,
}

impl ArcType {
    /// Returns the `type` attribute value yEd uses for this arc mode.
    pub fn to_yed_value(self) -> &'static str {
        match self {
            Self::FixedRatio => "fixedRatio",
            Self::FixedHeight => "fixedHeight",
        }
    }
}

impl FromStr for ArcType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixedRatio" => Ok(Self::FixedRatio),
            "fixedHeight" => Ok(Self::FixedHeight),
            _ => Err(format!(
                "invalid arc type `{s}`, valid values: fixedRatio, fixedHeight"
            )),
        }
    }
}

/// The type-specific extension data of an arc edge, rendered as `y:Arc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSettings {
    /// Arc interpretation mode.
    pub arc_type: ArcType,
    /// Arc height above the direct connection line.
    pub height: f64,
    /// Arc curvature ratio.
    pub ratio: f64,
}

impl Default for ArcSettings {
    fn default() -> Self {
        Self {
            arc_type: ArcType::default(),
            height: 30.0,
            ratio: 1.0,
        }
    }
}

impl ArcSettings {
    fn render(&self) -> Element {
        Element::new("y:Arc")
            .with("height", self.height)
            .with("ratio", self.ratio)
            .with("type", self.arc_type.to_yed_value())
    }
}

/// The closed catalog of edge kinds, each mapping to one `y:*Edge` realizer.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum EdgeKind {
    /// Arced connection with its arc extension data.
    Arc(ArcSettings),
    /// Bezier-curve connection.
    Bezier,
    /// Generic realizer configuration, e.g. `com.yworks.edge.framed`.
    Generic(String),
    /// Straight segments through the waypoints (yEd's default edge).
    #[default]
    PolyLine,
    /// Quadratic-curve connection.
    QuadCurve,
    /// Spline connection.
    Spline,
}

impl EdgeKind {
    /// The realizer tag name for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Arc(_) => "y:ArcEdge",
            Self::Bezier => "y:BezierEdge",
            Self::Generic(_) => "y:GenericEdge",
            Self::PolyLine => "y:PolyLineEdge",
            Self::QuadCurve => "y:QuadCurveEdge",
            Self::Spline => "y:SplineEdge",
        }
    }
}

/// A connection between two registered nodes.
///
/// Endpoints are set at construction and re-targeted only through
/// [`Document::set_edge_source`](crate::Document::set_edge_source) /
/// [`Document::set_edge_target`](crate::Document::set_edge_target), which
/// keep the document's incidence index consistent.
///
/// # Examples
///
/// ```
/// use yedoc::{Edge, EdgeKind};
/// use yedoc::identifier::Id;
///
/// let mut edge = Edge::new(Id::new("e1"), Id::new("a"), Id::new("b"))
///     .with_kind(EdgeKind::Spline);
/// edge.add_waypoint(50.0, 0.0);
/// edge.set_relative_waypoints(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: Id,
    kind: EdgeKind,
    source: Id,
    target: Id,
    source_anchor: Point,
    target_anchor: Point,
    waypoints: Vec<Point>,
    relative_waypoints: bool,
    line: LineStyle,
    arrows: Arrows,
    labels: Vec<EdgeLabel>,
}

impl Edge {
    /// Creates a poly-line edge between the given endpoints, anchored at
    /// both node centers.
    pub fn new(id: Id, source: Id, target: Id) -> Self {
        Self {
            id,
            kind: EdgeKind::default(),
            source,
            target,
            source_anchor: Point::default(),
            target_anchor: Point::default(),
            waypoints: Vec::new(),
            relative_waypoints: false,
            line: LineStyle::default(),
            arrows: Arrows::default(),
            labels: Vec::new(),
        }
    }

    /// Sets the edge kind (builder style).
    pub fn with_kind(mut self, kind: EdgeKind) -> Self {
        self.kind = kind;
        self
    }

    /// The document-unique identifier, immutable after creation.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Replaces the id. Only the document registry may do this, when
    /// instantiating templates.
    pub(crate) fn set_id(&mut self, id: Id) {
        self.id = id;
    }

    /// The edge kind.
    pub fn kind(&self) -> &EdgeKind {
        &self.kind
    }

    /// Sets the edge kind.
    pub fn set_kind(&mut self, kind: EdgeKind) {
        self.kind = kind;
    }

    /// The source node id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// The target node id.
    pub fn target(&self) -> Id {
        self.target
    }

    pub(crate) fn set_source(&mut self, source: Id) {
        self.source = source;
    }

    pub(crate) fn set_target(&mut self, target: Id) {
        self.target = target;
    }

    /// The (sx, sy) offset from the source node's center where the edge
    /// attaches.
    pub fn source_anchor(&self) -> Point {
        self.source_anchor
    }

    /// Sets the source anchor offset.
    pub fn set_source_anchor(&mut self, sx: f64, sy: f64) {
        self.source_anchor = Point::new(sx, sy);
    }

    /// The (tx, ty) offset from the target node's center where the edge
    /// attaches.
    pub fn target_anchor(&self) -> Point {
        self.target_anchor
    }

    /// Sets the target anchor offset.
    pub fn set_target_anchor(&mut self, tx: f64, ty: f64) {
        self.target_anchor = Point::new(tx, ty);
    }

    /// The stored waypoints, in source-to-target order.
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Appends a waypoint. The pair is an absolute position, or an offset
    /// from the previous path point when [`relative_waypoints`](Self::relative_waypoints)
    /// is set.
    pub fn add_waypoint(&mut self, x: f64, y: f64) {
        self.waypoints.push(Point::new(x, y));
    }

    /// Removes all waypoints.
    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
    }

    /// Whether waypoints are offsets chained from the source anchor.
    pub fn relative_waypoints(&self) -> bool {
        self.relative_waypoints
    }

    /// Sets waypoint chaining. Applies to every waypoint of this edge.
    pub fn set_relative_waypoints(&mut self, relative: bool) {
        self.relative_waypoints = relative;
    }

    /// The line stroke.
    pub fn line(&self) -> &LineStyle {
        &self.line
    }

    /// Mutable access to the line stroke.
    pub fn line_mut(&mut self) -> &mut LineStyle {
        &mut self.line
    }

    /// The arrow decorations.
    pub fn arrows(&self) -> Arrows {
        self.arrows
    }

    /// Sets the arrow decorations.
    pub fn set_arrows(&mut self, arrows: Arrows) {
        self.arrows = arrows;
    }

    /// The attached labels, in attachment order.
    pub fn labels(&self) -> &[EdgeLabel] {
        &self.labels
    }

    /// Mutable access to the attached labels.
    pub fn labels_mut(&mut self) -> &mut Vec<EdgeLabel> {
        &mut self.labels
    }

    /// Attaches a label.
    pub fn add_label(&mut self, label: EdgeLabel) {
        self.labels.push(label);
    }

    /// Renders the `y:*Edge` realizer subtree.
    ///
    /// `path` is the resolved absolute waypoint sequence; waypoint chaining
    /// happens in the document's coordinate resolver, never here.
    pub(crate) fn render_realizer(&self, path: &[Point]) -> Element {
        let mut path_element = Element::new("y:Path")
            .with("sx", self.source_anchor.x())
            .with("sy", self.source_anchor.y())
            .with("tx", self.target_anchor.x())
            .with("ty", self.target_anchor.y());
        for point in path {
            path_element = path_element.child(
                Element::new("y:Point")
                    .with("x", point.x())
                    .with("y", point.y()),
            );
        }

        let mut realizer = match &self.kind {
            EdgeKind::Generic(configuration) => {
                Element::new(self.kind.tag()).with("configuration", configuration.as_str())
            }
            _ => Element::new(self.kind.tag()),
        };
        realizer = realizer
            .child(path_element)
            .child(self.line.render("y:LineStyle"))
            .child(self.arrows.render());
        for label in &self.labels {
            realizer = realizer.child(label.render());
        }
        if let EdgeKind::Arc(settings) = &self.kind {
            realizer = realizer.child(settings.render());
        }
        realizer
    }
}
