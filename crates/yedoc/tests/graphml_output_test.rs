//! Integration tests for GraphML assembly
//!
//! These tests build complete documents and check the emitted markup:
//! prolog, key declarations, layer ordering, resolved coordinates and
//! the all-or-nothing file write.

use yedoc::draw::ShapeKind;
use yedoc::identifier::Id;
use yedoc::{Document, Edge, GenericNode, ShapeNode, YedocError};

#[test]
fn test_empty_document_skeleton() {
    let xml = Document::new().build().unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>"));
    assert!(xml.contains("<graphml "));
    assert!(xml.contains("xmlns:y=\"http://www.yworks.com/xml/graphml\""));
    for key in ["d0", "d4", "d6", "d7", "d10"] {
        assert!(xml.contains(&format!("id=\"{key}\"")), "missing key {key}");
    }
    assert!(xml.contains("<graph edgedefault=\"directed\" id=\"G\"/>"));
    assert!(xml.contains("<data key=\"d7\">"));
    assert!(xml.contains("<y:Resources/>"));
    assert!(!xml.contains("<node "));
}

#[test]
fn test_layer_ordering_and_id_tiebreak() {
    let mut doc = Document::new();
    for (id, layer) in [("zz", 2), ("mid", 0), ("aa", 1), ("ab", 1)] {
        doc.add_node(ShapeNode::new(Id::new(id))).unwrap();
        doc.node_mut(Id::new(id)).unwrap().set_layer(layer);
    }
    let xml = doc.build().unwrap();

    let offset = |id: &str| {
        xml.find(&format!("<node id=\"{id}\">"))
            .unwrap_or_else(|| panic!("node {id} not emitted"))
    };
    // Back layer first, front layer last; same layer ordered by id
    assert!(offset("mid") < offset("aa"));
    assert!(offset("aa") < offset("ab"));
    assert!(offset("ab") < offset("zz"));
}

#[test]
fn test_node_markup_carries_resolved_geometry() {
    let mut doc = Document::new();
    doc.add_node(ShapeNode::new(Id::new("base")).with_shape(ShapeKind::Hexagon))
        .unwrap();
    doc.node_mut(Id::new("base")).unwrap().set_position(40.0, 60.0);
    doc.add_node(ShapeNode::new(Id::new("sat"))).unwrap();
    {
        let sat = doc.node_mut(Id::new("sat")).unwrap();
        sat.set_position(10.0, -20.0);
        sat.set_relative(Some(Id::new("base"))).unwrap();
    }
    let xml = doc.build().unwrap();

    assert!(xml.contains("<y:Geometry height=\"30\" width=\"30\" x=\"40\" y=\"60\"/>"));
    assert!(xml.contains("<y:Geometry height=\"30\" width=\"30\" x=\"50\" y=\"40\"/>"));
    assert!(xml.contains("<y:Shape type=\"hexagon\"/>"));
}

#[test]
fn test_generic_node_and_edge_markup() {
    let mut doc = Document::new();
    doc.add_node(GenericNode::new(Id::new("start"), "com.yworks.flowchart.start1"))
        .unwrap();
    doc.add_node(ShapeNode::new(Id::new("end"))).unwrap();
    doc.node_mut(Id::new("end")).unwrap().set_position(200.0, 0.0);
    doc.add_edge(Edge::new(Id::new("flow"), Id::new("start"), Id::new("end")))
        .unwrap();
    let xml = doc.build().unwrap();

    assert!(xml.contains("<y:GenericNode configuration=\"com.yworks.flowchart.start1\">"));
    assert!(xml.contains("<edge id=\"flow\" source=\"start\" target=\"end\">"));
    assert!(xml.contains("<data key=\"d10\">"));
    assert!(xml.contains("<y:PolyLineEdge>"));
    assert!(xml.contains("<y:Path sx=\"0\" sy=\"0\" tx=\"0\" ty=\"0\"/>"));
}

#[test]
fn test_relative_waypoints_chain_from_source_center() {
    let mut doc = Document::new();
    doc.add_node(ShapeNode::new(Id::new("a"))).unwrap();
    doc.node_mut(Id::new("a")).unwrap().set_position(85.0, 135.0);
    doc.add_node(ShapeNode::new(Id::new("b"))).unwrap();

    let mut edge = Edge::new(Id::new("e"), Id::new("a"), Id::new("b"));
    edge.set_relative_waypoints(true);
    edge.add_waypoint(0.0, 50.0);
    edge.add_waypoint(50.0, 0.0);
    doc.add_edge(edge).unwrap();
    let xml = doc.build().unwrap();

    // Source center is (100, 150): position plus half the default size
    assert!(xml.contains("<y:Point x=\"100\" y=\"200\"/>"));
    assert!(xml.contains("<y:Point x=\"150\" y=\"200\"/>"));
}

#[test]
fn test_build_is_deterministic() {
    let mut doc = Document::new();
    for id in ["n2", "n0", "n1"] {
        doc.add_node(ShapeNode::new(Id::new(id))).unwrap();
    }
    doc.add_edge(Edge::new(Id::new("e1"), Id::new("n2"), Id::new("n0")))
        .unwrap();
    doc.add_edge(Edge::new(Id::new("e0"), Id::new("n0"), Id::new("n1")))
        .unwrap();

    assert_eq!(doc.build().unwrap(), doc.build().unwrap());
}

#[test]
fn test_failed_build_writes_no_file() {
    let mut doc = Document::new();
    doc.add_node(ShapeNode::new(Id::new("orphan"))).unwrap();
    doc.node_mut(Id::new("orphan"))
        .unwrap()
        .set_relative(Some(Id::new("ghost")))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("diagram");
    let result = doc.build_to_file(base.to_str().unwrap());

    assert!(matches!(
        result,
        Err(YedocError::DanglingReference { .. })
    ));
    assert!(!dir.path().join("diagram.graphml").exists());
}

#[test]
fn test_build_to_file_writes_rendered_output() {
    let mut doc = Document::new();
    doc.add_node(ShapeNode::new(Id::new("only"))).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("diagram");
    let xml = doc.build_to_file(base.to_str().unwrap()).unwrap();

    let on_disk = std::fs::read_to_string(dir.path().join("diagram.graphml")).unwrap();
    assert_eq!(on_disk, xml);
}
