//! GraphML document assembly and persistence.
//!
//! The builder walks the registry back-to-front by layer, validates every
//! cross-reference before a single element is emitted, resolves all
//! coordinates through the document's resolver and assembles the complete
//! `<graphml>` tree in memory. Writing the optional output file is the last
//! step and is all-or-nothing: a failed build never leaves a partial file
//! behind.
//!
//! Within a layer, and among edges, the order is contractually unspecified;
//! this builder sorts by id string so that identical documents always
//! produce identical output.

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::node::element::Element;

use yedoc_core::draw::ElementExt;

use crate::{
    document::Document,
    element::{Edge, Node},
    error::YedocError,
    export::Exporter,
};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// GraphML exporter with an optional persistence target.
///
/// # Examples
///
/// ```
/// use yedoc::{Document, ShapeNode};
/// use yedoc::export::{Exporter, graphml::Graphml};
/// use yedoc::identifier::Id;
///
/// let mut doc = Document::new();
/// doc.add_node(ShapeNode::new(Id::new("a"))).unwrap();
///
/// // Render to a string without touching the filesystem
/// let xml = Graphml::new().export_document(&doc).unwrap();
/// assert!(xml.starts_with("<?xml"));
/// ```
#[derive(Debug, Default)]
pub struct Graphml {
    file_name: Option<String>,
}

impl Graphml {
    /// Creates an exporter that only renders to a string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an exporter that additionally persists to
    /// `<base_name>.graphml`.
    pub fn with_file_name(base_name: &str) -> Self {
        Self {
            file_name: Some(format!("{base_name}.graphml")),
        }
    }

    /// Renders the document to a GraphML string.
    ///
    /// All referential checks run before any element is assembled, so an
    /// invalid document fails without partial output.
    pub fn render_document(&self, document: &Document) -> Result<String, YedocError> {
        check_references(document)?;

        let graph = render_graph(document)?;
        let root = graphml_root()
            .child(graph)
            .child(
                Element::new("data")
                    .with("key", "d7")
                    .child(Element::new("y:Resources")),
            );
        debug!(
            nodes = document.node_count(), edges = document.edge_count();
            "GraphML document rendered"
        );
        Ok(format!("{XML_DECLARATION}\n{root}"))
    }

    /// Writes rendered GraphML to the configured file.
    pub fn write_document(&self, xml: &str) -> Result<(), YedocError> {
        let Some(file_name) = &self.file_name else {
            return Ok(());
        };
        info!(file_name = file_name.as_str(); "Creating GraphML file");
        let mut f = match File::create(file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = file_name.as_str(), err:err; "Failed to create GraphML file");
                return Err(YedocError::Io(err));
            }
        };

        if let Err(err) = f.write_all(xml.as_bytes()) {
            error!(file_name = file_name.as_str(), err:err; "Failed to write GraphML content");
            return Err(YedocError::Io(err));
        }

        Ok(())
    }
}

impl Exporter for Graphml {
    fn export_document(&self, document: &Document) -> Result<String, YedocError> {
        let xml = self.render_document(document)?;
        self.write_document(&xml)?;
        Ok(xml)
    }
}

/// Verifies every cross-reference of the document: relative anchors of
/// nodes and both endpoints of every edge must be registered.
fn check_references(document: &Document) -> Result<(), YedocError> {
    for node in document.nodes() {
        if let Some(anchor) = node.relative() {
            if !document.contains_node(anchor) {
                return Err(YedocError::DanglingReference {
                    entity: node.id(),
                    missing: anchor,
                });
            }
        }
    }
    for edge in document.edges() {
        for endpoint in [edge.source(), edge.target()] {
            if !document.contains_node(endpoint) {
                return Err(YedocError::DanglingReference {
                    entity: edge.id(),
                    missing: endpoint,
                });
            }
        }
    }
    Ok(())
}

/// Assembles the `<graph>` element: nodes grouped by ascending layer, then
/// edges, each group sorted by id string.
fn render_graph(document: &Document) -> Result<Element, YedocError> {
    let mut graph = Element::new("graph")
        .with("edgedefault", "directed")
        .with("id", "G");

    let front_layer = document.nodes().map(Node::layer).max().unwrap_or(0);
    for layer in 0..=front_layer {
        let mut members: Vec<&Node> = document.nodes().filter(|n| n.layer() == layer).collect();
        members.sort_by_key(|node| node.id().to_string());
        for node in members {
            graph = graph.child(render_node(document, node)?);
        }
    }

    let mut edges: Vec<&Edge> = document.edges().collect();
    edges.sort_by_key(|edge| edge.id().to_string());
    for edge in edges {
        graph = graph.child(render_edge(document, edge)?);
    }

    Ok(graph)
}

fn render_node(document: &Document, node: &Node) -> Result<Element, YedocError> {
    let origin = document.absolute_position(node.id())?;
    Ok(Element::new("node")
        .with("id", node.id().to_string())
        .child(Element::new("data").with("key", "d4"))
        .child(Element::new("data").with("key", "d5"))
        .child(
            Element::new("data")
                .with("key", "d6")
                .child(node.render_realizer(origin)),
        ))
}

fn render_edge(document: &Document, edge: &Edge) -> Result<Element, YedocError> {
    let path = document.edge_path(edge)?;
    Ok(Element::new("edge")
        .with("id", edge.id().to_string())
        .with("source", edge.source().to_string())
        .with("target", edge.target().to_string())
        .child(Element::new("data").with("key", "d8"))
        .child(Element::new("data").with("key", "d9"))
        .child(
            Element::new("data")
                .with("key", "d10")
                .child(edge.render_realizer(&path)),
        ))
}

/// The fixed `<graphml>` root: namespace declarations, schema location and
/// the typed data-column keys `d0`..`d10` yEd expects.
fn graphml_root() -> Element {
    let mut root = Element::new("graphml")
        .with("xmlns", "http://graphml.graphdrawing.org/xmlns")
        .with("xmlns:java", "http://www.yworks.com/xml/yfiles-common/1.0/java")
        .with(
            "xmlns:sys",
            "http://www.yworks.com/xml/yfiles-common/markup/primitives/2.0",
        )
        .with("xmlns:x", "http://www.yworks.com/xml/yfiles-common/markup/2.0")
        .with("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance")
        .with("xmlns:y", "http://www.yworks.com/xml/graphml")
        .with("xmlns:yed", "http://www.yworks.com/xml/yed/3")
        .with(
            "xsi:schemaLocation",
            "http://graphml.graphdrawing.org/xmlns http://www.yworks.com/xml/schema/graphml/1.1/ygraphml.xsd",
        );
    for key in key_declarations() {
        root = root.child(key);
    }
    root
}

fn key_declarations() -> Vec<Element> {
    vec![
        attribute_key("d0", "graph", "Description"),
        yfiles_key("d1", "port", "portgraphics"),
        yfiles_key("d2", "port", "portgeometry"),
        yfiles_key("d3", "port", "portuserdata"),
        attribute_key("d4", "node", "url"),
        attribute_key("d5", "node", "description"),
        yfiles_key("d6", "node", "nodegraphics"),
        yfiles_key("d7", "graphml", "resources"),
        attribute_key("d8", "edge", "url"),
        attribute_key("d9", "edge", "description"),
        yfiles_key("d10", "edge", "edgegraphics"),
    ]
}

fn attribute_key(id: &str, target: &str, name: &str) -> Element {
    Element::new("key")
        .with("attr.name", name)
        .with("attr.type", "string")
        .with("for", target)
        .with("id", id)
}

fn yfiles_key(id: &str, target: &str, yfiles_type: &str) -> Element {
    Element::new("key")
        .with("for", target)
        .with("id", id)
        .with("yfiles.type", yfiles_type)
}

impl Document {
    /// Builds the GraphML string for the current document state.
    ///
    /// # Errors
    ///
    /// [`YedocError::DanglingReference`] when an edge endpoint or a
    /// relative anchor is unregistered, [`YedocError::CyclicReference`]
    /// when a relative chain is cyclic.
    pub fn build(&self) -> Result<String, YedocError> {
        Graphml::new().export_document(self)
    }

    /// Builds the GraphML string and persists it to `<base_name>.graphml`.
    ///
    /// The string is assembled fully in memory first; when the build fails
    /// no file is created, and a write failure propagates as
    /// [`YedocError::Io`].
    pub fn build_to_file(&self, base_name: &str) -> Result<String, YedocError> {
        Graphml::with_file_name(base_name).export_document(self)
    }
}
