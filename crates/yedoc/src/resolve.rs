//! Absolute-coordinate resolution through relative chains.
//!
//! Nodes may anchor their coordinates to another node, forming chains of
//! arbitrary depth; edges may chain their waypoints from the source anchor.
//! This module resolves both into absolute drawing-pane coordinates.
//!
//! Resolution walks each chain on demand and is not memoized: positions can
//! change between builds, a build resolves each entity once, and chains are
//! short in practice. Every walk begins with a cycle check that compares
//! node identity (never coordinate values) and is bounded by the number of
//! registered nodes, so a malformed chain fails deterministically with
//! [`YedocError::CyclicReference`] instead of recursing without bound.

use yedoc_core::{geometry::Point, identifier::Id};

use crate::{document::Document, element::Edge, error::YedocError};

impl Document {
    /// Walks the relative chain starting at `id`, failing on a revisit of
    /// the start node or on a walk longer than the registry can explain.
    fn check_relative_chain(&self, id: Id) -> Result<(), YedocError> {
        let bound = self.node_count();
        let mut hops = 0usize;
        let mut current = self.require_node(id, id)?.relative();
        while let Some(next) = current {
            hops += 1;
            if next == id || hops > bound {
                return Err(YedocError::CyclicReference { id, hops });
            }
            current = self.require_node(next, id)?.relative();
        }
        Ok(())
    }

    fn require_node(&self, id: Id, referrer: Id) -> Result<&crate::element::Node, YedocError> {
        self.node(id).ok_or(YedocError::DanglingReference {
            entity: referrer,
            missing: id,
        })
    }

    /// Resolves a node's absolute upper-left corner.
    ///
    /// A node with no relative anchor is absolute by definition; otherwise
    /// the position is the node's own coordinates plus its anchor's
    /// absolute position, recursively.
    ///
    /// # Errors
    ///
    /// [`YedocError::CyclicReference`] when the chain revisits the node,
    /// [`YedocError::DanglingReference`] when a chain member is not
    /// registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use yedoc::{Document, ShapeNode};
    /// use yedoc::identifier::Id;
    ///
    /// let mut doc = Document::new();
    /// doc.add_node(ShapeNode::new(Id::new("anchor"))).unwrap();
    /// doc.node_mut(Id::new("anchor")).unwrap().set_position(100.0, 20.0);
    ///
    /// doc.add_node(ShapeNode::new(Id::new("satellite"))).unwrap();
    /// let node = doc.node_mut(Id::new("satellite")).unwrap();
    /// node.set_position(30.0, 5.0);
    /// node.set_relative(Some(Id::new("anchor"))).unwrap();
    ///
    /// let absolute = doc.absolute_position(Id::new("satellite")).unwrap();
    /// assert_eq!(absolute.x(), 130.0);
    /// assert_eq!(absolute.y(), 25.0);
    /// ```
    pub fn absolute_position(&self, id: Id) -> Result<Point, YedocError> {
        self.check_relative_chain(id)?;

        let mut position = Point::default();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.require_node(node_id, id)?;
            position = position.add_point(node.position());
            current = node.relative();
        }
        Ok(position)
    }

    /// Resolves a node's absolute x-coordinate.
    pub fn absolute_x(&self, id: Id) -> Result<f64, YedocError> {
        Ok(self.absolute_position(id)?.x())
    }

    /// Resolves a node's absolute y-coordinate.
    pub fn absolute_y(&self, id: Id) -> Result<f64, YedocError> {
        Ok(self.absolute_position(id)?.y())
    }

    /// Resolves the absolute center of a node's bounding box.
    pub fn absolute_center(&self, id: Id) -> Result<Point, YedocError> {
        let position = self.absolute_position(id)?;
        let size = self.require_node(id, id)?.size();
        Ok(position.add_point(size.center_offset()))
    }

    /// Resolves an edge's waypoints into absolute positions, in
    /// source-to-target order.
    ///
    /// In absolute mode the stored points are returned verbatim. In
    /// relative mode a running point is seeded at the source node's
    /// absolute center plus the source anchor offset; each stored offset is
    /// added to it in turn and the running point advances to each newly
    /// resolved waypoint.
    pub fn edge_path(&self, edge: &Edge) -> Result<Vec<Point>, YedocError> {
        if !edge.relative_waypoints() {
            return Ok(edge.waypoints().to_vec());
        }

        let source_center = self.absolute_center(edge.source()).map_err(|err| {
            // Attribute a missing source to the edge, not to the node walk.
            match err {
                YedocError::DanglingReference { missing, .. } => YedocError::DanglingReference {
                    entity: edge.id(),
                    missing,
                },
                other => other,
            }
        })?;
        let mut previous = source_center.add_point(edge.source_anchor());
        let mut path = Vec::with_capacity(edge.waypoints().len());
        for offset in edge.waypoints() {
            previous = previous.add_point(*offset);
            path.push(previous);
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use yedoc_core::geometry::Point;
    use yedoc_core::identifier::Id;

    use crate::document::Document;
    use crate::element::{Edge, ShapeNode};
    use crate::error::YedocError;

    fn add_node_at(doc: &mut Document, id: &str, x: f64, y: f64) {
        doc.add_node(ShapeNode::new(Id::new(id))).unwrap();
        doc.node_mut(Id::new(id)).unwrap().set_position(x, y);
    }

    fn anchor(doc: &mut Document, id: &str, to: &str) {
        doc.node_mut(Id::new(id))
            .unwrap()
            .set_relative(Some(Id::new(to)))
            .unwrap();
    }

    #[test]
    fn test_unanchored_node_is_absolute() {
        let mut doc = Document::new();
        add_node_at(&mut doc, "a", 12.5, -4.0);
        assert_approx_eq!(f64, doc.absolute_x(Id::new("a")).unwrap(), 12.5);
        assert_approx_eq!(f64, doc.absolute_y(Id::new("a")).unwrap(), -4.0);
    }

    #[test]
    fn test_chain_accumulates_offsets() {
        let mut doc = Document::new();
        add_node_at(&mut doc, "a", 100.0, 10.0);
        add_node_at(&mut doc, "b", 20.0, 2.0);
        add_node_at(&mut doc, "c", 3.0, 0.5);
        anchor(&mut doc, "b", "a");
        anchor(&mut doc, "c", "b");

        assert_approx_eq!(f64, doc.absolute_x(Id::new("c")).unwrap(), 123.0);
        assert_approx_eq!(f64, doc.absolute_y(Id::new("c")).unwrap(), 12.5);
    }

    #[test]
    fn test_cycle_detected_from_any_member() {
        let mut doc = Document::new();
        for id in ["a", "b", "c"] {
            add_node_at(&mut doc, id, 1.0, 1.0);
        }
        anchor(&mut doc, "a", "b");
        anchor(&mut doc, "b", "c");
        anchor(&mut doc, "c", "a");

        for id in ["a", "b", "c"] {
            let err = doc.absolute_x(Id::new(id)).unwrap_err();
            assert!(
                matches!(err, YedocError::CyclicReference { id: start, hops } if start == *id && hops == 3),
                "expected cycle error for `{id}`, got {err:?}"
            );
        }
    }

    #[test]
    fn test_absolute_center() {
        let mut doc = Document::new();
        add_node_at(&mut doc, "a", 85.0, 90.0);
        doc.node_mut(Id::new("a")).unwrap().set_size(30.0, 20.0).unwrap();

        let center = doc.absolute_center(Id::new("a")).unwrap();
        assert_approx_eq!(f64, center.x(), 100.0);
        assert_approx_eq!(f64, center.y(), 100.0);
    }

    #[test]
    fn test_absolute_waypoints_pass_through() {
        let mut doc = Document::new();
        add_node_at(&mut doc, "a", 0.0, 0.0);
        add_node_at(&mut doc, "b", 200.0, 0.0);
        let mut edge = Edge::new(Id::new("e"), Id::new("a"), Id::new("b"));
        edge.add_waypoint(5.0, 5.0);
        edge.add_waypoint(10.0, 10.0);
        doc.add_edge(edge).unwrap();

        let path = doc.edge_path(doc.edge(Id::new("e")).unwrap()).unwrap();
        assert_eq!(path, vec![Point::new(5.0, 5.0), Point::new(10.0, 10.0)]);
    }

    #[test]
    fn test_relative_waypoints_chain_from_source_center() {
        let mut doc = Document::new();
        // Center at (100, 100)
        add_node_at(&mut doc, "a", 85.0, 90.0);
        doc.node_mut(Id::new("a")).unwrap().set_size(30.0, 20.0).unwrap();
        add_node_at(&mut doc, "b", 200.0, 200.0);

        let mut edge = Edge::new(Id::new("e"), Id::new("a"), Id::new("b"));
        edge.set_relative_waypoints(true);
        edge.add_waypoint(0.0, 50.0);
        edge.add_waypoint(50.0, 0.0);
        doc.add_edge(edge).unwrap();

        let path = doc.edge_path(doc.edge(Id::new("e")).unwrap()).unwrap();
        assert_eq!(
            path,
            vec![Point::new(100.0, 150.0), Point::new(150.0, 150.0)]
        );
    }

    #[test]
    fn test_relative_waypoints_include_source_anchor() {
        let mut doc = Document::new();
        add_node_at(&mut doc, "a", 85.0, 90.0);
        doc.node_mut(Id::new("a")).unwrap().set_size(30.0, 20.0).unwrap();
        add_node_at(&mut doc, "b", 200.0, 200.0);

        let mut edge = Edge::new(Id::new("e"), Id::new("a"), Id::new("b"));
        edge.set_relative_waypoints(true);
        edge.set_source_anchor(0.0, 10.0);
        edge.add_waypoint(25.0, 0.0);
        doc.add_edge(edge).unwrap();

        let path = doc.edge_path(doc.edge(Id::new("e")).unwrap()).unwrap();
        assert_eq!(path, vec![Point::new(125.0, 110.0)]);
    }

    #[test]
    fn test_anchored_edge_source_resolves_through_chain() {
        let mut doc = Document::new();
        add_node_at(&mut doc, "root", 100.0, 100.0);
        add_node_at(&mut doc, "a", 20.0, 20.0);
        anchor(&mut doc, "a", "root");
        add_node_at(&mut doc, "b", 0.0, 0.0);

        let mut edge = Edge::new(Id::new("e"), Id::new("a"), Id::new("b"));
        edge.set_relative_waypoints(true);
        edge.add_waypoint(1.0, 1.0);
        doc.add_edge(edge).unwrap();

        // Source node "a" sits at absolute (120, 120) with default 30x30 size
        let path = doc.edge_path(doc.edge(Id::new("e")).unwrap()).unwrap();
        assert_eq!(path, vec![Point::new(136.0, 136.0)]);
    }

    proptest! {
        /// The absolute position of the deepest node of a chain equals the
        /// component-wise sum of all stored offsets along it.
        #[test]
        fn prop_chain_sums_offsets(offsets in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 1..20)) {
            let mut doc = Document::new();
            let mut expected_x = 0.0;
            let mut expected_y = 0.0;
            let mut previous: Option<String> = None;
            for (index, (x, y)) in offsets.iter().enumerate() {
                let name = format!("chain-{index}");
                add_node_at(&mut doc, &name, *x, *y);
                if let Some(parent) = &previous {
                    anchor(&mut doc, &name, parent);
                }
                expected_x += x;
                expected_y += y;
                previous = Some(name);
            }

            let deepest = Id::new(&previous.unwrap());
            prop_assert!((doc.absolute_x(deepest).unwrap() - expected_x).abs() < 1e-6);
            prop_assert!((doc.absolute_y(deepest).unwrap() - expected_y).abs() < 1e-6);
        }
    }
}
