//! The entity registry: document membership, identity and integrity.
//!
//! A [`Document`] owns every node and edge of one diagram. Entities are
//! stored in an arena keyed by [`Id`]; cross-references are ids, and an
//! incidence index (node id → incident edge ids) is maintained
//! transactionally on every mutation so removal cascades never chase
//! dangling pointers.
//!
//! # Identity rules
//!
//! - Registering an entity under an id held by any live node or edge fails
//!   with [`YedocError::DuplicateId`] before anything is mutated.
//! - [`Document::free_id`] issues auto-ids from a counter that never
//!   decreases; an id freed by removal is only ever reused once the counter
//!   naturally reaches it.
//! - Removing an entity that is not registered is a successful no-op, which
//!   keeps cascading removal idempotent.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use log::debug;

use yedoc_core::{
    draw::{EdgeLabel, NodeLabel},
    identifier::Id,
};

use crate::{
    element::{Edge, Node},
    error::YedocError,
};

/// The authoritative set of nodes and edges of one diagram, plus its
/// template registries.
///
/// All mutation goes through this type; see the module documentation for
/// the identity rules it enforces. Building the GraphML output is provided
/// by [`Document::build`](crate::Document::build) in the export module.
///
/// # Examples
///
/// ```
/// use yedoc::{Document, Edge, ShapeNode};
/// use yedoc::identifier::Id;
///
/// let mut doc = Document::new();
/// doc.add_node(ShapeNode::new(Id::new("a"))).unwrap();
/// doc.add_node(ShapeNode::new(Id::new("b"))).unwrap();
/// doc.add_edge(Edge::new(Id::new("e"), Id::new("a"), Id::new("b"))).unwrap();
/// assert_eq!(doc.node_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Document {
    nodes: IndexMap<Id, Node>,
    edges: IndexMap<Id, Edge>,
    /// Node id → ids of edges having that node as an endpoint.
    incidence: HashMap<Id, HashSet<Id>>,
    /// Next candidate for [`Self::free_id`]; monotonic.
    next_id: u64,
    node_templates: HashMap<String, Node>,
    edge_templates: HashMap<String, Edge>,
    node_label_templates: HashMap<String, NodeLabel>,
    edge_label_templates: HashMap<String, EdgeLabel>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Registers a node. Fails with [`YedocError::DuplicateId`] when the id
    /// is already held by a registered node or edge; the document is left
    /// untouched in that case.
    pub fn add_node(&mut self, node: impl Into<Node>) -> Result<(), YedocError> {
        let node = node.into();
        let id = node.id();
        if self.nodes.contains_key(&id) || self.edges.contains_key(&id) {
            return Err(YedocError::DuplicateId { id });
        }
        self.nodes.insert(id, node);
        self.incidence.entry(id).or_default();
        Ok(())
    }

    /// Registers an edge. Fails with [`YedocError::DuplicateId`] on an id
    /// collision and with [`YedocError::DanglingReference`] when either
    /// endpoint is not registered; the document is left untouched in both
    /// cases.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), YedocError> {
        let id = edge.id();
        if self.nodes.contains_key(&id) || self.edges.contains_key(&id) {
            return Err(YedocError::DuplicateId { id });
        }
        for endpoint in [edge.source(), edge.target()] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(YedocError::DanglingReference {
                    entity: id,
                    missing: endpoint,
                });
            }
        }
        self.record_incidence(&edge);
        self.edges.insert(id, edge);
        Ok(())
    }

    /// Returns the smallest unused integer id at or above the internal
    /// counter, and advances the counter past it.
    ///
    /// Issued values never collide with each other or with any manually
    /// assigned id currently registered; the counter never decreases, so an
    /// id freed by removal is reused only once the counter naturally
    /// reaches it.
    pub fn free_id(&mut self) -> u64 {
        loop {
            let candidate = self.next_id;
            self.next_id += 1;
            let id = Id::from_index(candidate);
            if !self.nodes.contains_key(&id) && !self.edges.contains_key(&id) {
                return candidate;
            }
        }
    }

    /// Deregisters a node, cascading to everything that depends on it.
    ///
    /// Every incident edge is removed. Nodes anchored to the removed node
    /// are then either removed recursively (`keep_relative = false`, the
    /// default cascade) or frozen in place: their current absolute position
    /// becomes their own stored position and the anchor is cleared, leaving
    /// them registered and visually stationary.
    ///
    /// Removing an unregistered node is a successful no-op.
    ///
    /// # Errors
    ///
    /// With `keep_relative = true` the dependents' positions must be
    /// resolved, which can fail with [`YedocError::CyclicReference`].
    pub fn remove_node(&mut self, id: Id, keep_relative: bool) -> Result<(), YedocError> {
        if !self.nodes.contains_key(&id) {
            return Ok(());
        }

        let dependents: Vec<Id> = self
            .nodes
            .values()
            .filter(|node| node.relative() == Some(id))
            .map(Node::id)
            .collect();

        // Resolve while the anchor chain is still intact.
        let mut frozen = Vec::new();
        if keep_relative {
            for dependent in &dependents {
                frozen.push((*dependent, self.absolute_position(*dependent)?));
            }
        }

        let mut incident: Vec<Id> = self
            .incidence
            .get(&id)
            .map(|edges| edges.iter().copied().collect())
            .unwrap_or_default();
        incident.sort_by_key(Id::to_string);
        for edge_id in incident {
            debug!(node = id.to_string(), edge = edge_id.to_string(); "Removing incident edge");
            self.remove_edge(edge_id);
        }

        self.nodes.shift_remove(&id);
        self.incidence.remove(&id);

        if keep_relative {
            for (dependent, position) in frozen {
                debug!(node = id.to_string(), dependent = dependent.to_string(); "Freezing dependent at absolute position");
                if let Some(node) = self.nodes.get_mut(&dependent) {
                    node.set_position(position.x(), position.y());
                    node.clear_relative();
                }
            }
        } else {
            for dependent in dependents {
                debug!(node = id.to_string(), dependent = dependent.to_string(); "Cascading removal to dependent");
                self.remove_node(dependent, false)?;
            }
        }
        Ok(())
    }

    /// Deregisters an edge from the registry and from both endpoints'
    /// incidence sets. Removing an unregistered edge is a successful no-op.
    pub fn remove_edge(&mut self, id: Id) {
        let Some(edge) = self.edges.shift_remove(&id) else {
            return;
        };
        for endpoint in [edge.source(), edge.target()] {
            if let Some(edges) = self.incidence.get_mut(&endpoint) {
                edges.remove(&id);
            }
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Looks up a node by id.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Looks up a node by id, mutably.
    pub fn node_mut(&mut self, id: Id) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: Id) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Looks up an edge by id, mutably.
    pub fn edge_mut(&mut self, id: Id) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    /// Whether a node with this id is registered.
    pub fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Whether an edge with this id is registered.
    pub fn contains_edge(&self, id: Id) -> bool {
        self.edges.contains_key(&id)
    }

    /// Iterates over all registered nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterates over all registered edges in registration order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// The number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of registered edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The ids of the edges incident to a node, sorted by id string.
    pub fn incident_edges(&self, id: Id) -> Vec<Id> {
        let mut edges: Vec<Id> = self
            .incidence
            .get(&id)
            .map(|edges| edges.iter().copied().collect())
            .unwrap_or_default();
        edges.sort_by_key(Id::to_string);
        edges
    }

    // =========================================================================
    // Edge re-targeting
    // =========================================================================

    /// Re-targets an edge's source endpoint, keeping the incidence index
    /// consistent. Fails with [`YedocError::DanglingReference`] when the
    /// edge or the new endpoint is not registered.
    pub fn set_edge_source(&mut self, edge_id: Id, node_id: Id) -> Result<(), YedocError> {
        self.retarget_edge(edge_id, node_id, true)
    }

    /// Re-targets an edge's target endpoint, keeping the incidence index
    /// consistent. Fails with [`YedocError::DanglingReference`] when the
    /// edge or the new endpoint is not registered.
    pub fn set_edge_target(&mut self, edge_id: Id, node_id: Id) -> Result<(), YedocError> {
        self.retarget_edge(edge_id, node_id, false)
    }

    fn retarget_edge(
        &mut self,
        edge_id: Id,
        node_id: Id,
        is_source: bool,
    ) -> Result<(), YedocError> {
        if !self.nodes.contains_key(&node_id) {
            return Err(YedocError::DanglingReference {
                entity: edge_id,
                missing: node_id,
            });
        }
        let Some(edge) = self.edges.get_mut(&edge_id) else {
            return Err(YedocError::DanglingReference {
                entity: edge_id,
                missing: edge_id,
            });
        };

        let (old, other) = if is_source {
            let old = edge.source();
            edge.set_source(node_id);
            (old, edge.target())
        } else {
            let old = edge.target();
            edge.set_target(node_id);
            (old, edge.source())
        };

        // The edge stays in the old endpoint's set when that node is still
        // its other endpoint.
        if old != other {
            if let Some(edges) = self.incidence.get_mut(&old) {
                edges.remove(&edge_id);
            }
        }
        self.incidence.entry(node_id).or_default().insert(edge_id);
        Ok(())
    }

    fn record_incidence(&mut self, edge: &Edge) {
        for endpoint in [edge.source(), edge.target()] {
            self.incidence.entry(endpoint).or_default().insert(edge.id());
        }
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Stores a private copy of a node prototype under a name. A previously
    /// stored template of the same name is replaced.
    pub fn add_node_template(&mut self, name: &str, node: impl Into<Node>) {
        self.node_templates.insert(name.to_string(), node.into());
    }

    /// Returns a fresh deep copy of a stored node template. Mutating the
    /// copy never affects the template or previously issued copies.
    pub fn node_template(&self, name: &str) -> Option<Node> {
        self.node_templates.get(name).cloned()
    }

    /// Instantiates a node template, registers the copy under `id` (or a
    /// freshly issued auto-id) and returns the registered id.
    pub fn add_node_from_template(
        &mut self,
        name: &str,
        id: Option<Id>,
    ) -> Result<Id, YedocError> {
        let mut node = self
            .node_templates
            .get(name)
            .cloned()
            .ok_or_else(|| YedocError::UnknownTemplate {
                name: name.to_string(),
            })?;
        let id = id.unwrap_or_else(|| Id::from_index(self.free_id()));
        node.set_id(id);
        self.add_node(node)?;
        Ok(id)
    }

    /// Stores a private copy of an edge prototype under a name.
    pub fn add_edge_template(&mut self, name: &str, edge: Edge) {
        self.edge_templates.insert(name.to_string(), edge);
    }

    /// Returns a fresh deep copy of a stored edge template.
    pub fn edge_template(&self, name: &str) -> Option<Edge> {
        self.edge_templates.get(name).cloned()
    }

    /// Instantiates an edge template between the given endpoints, registers
    /// the copy under `id` (or a freshly issued auto-id) and returns the
    /// registered id.
    pub fn add_edge_from_template(
        &mut self,
        name: &str,
        id: Option<Id>,
        source: Id,
        target: Id,
    ) -> Result<Id, YedocError> {
        let mut edge = self
            .edge_templates
            .get(name)
            .cloned()
            .ok_or_else(|| YedocError::UnknownTemplate {
                name: name.to_string(),
            })?;
        let id = id.unwrap_or_else(|| Id::from_index(self.free_id()));
        edge.set_id(id);
        edge.set_source(source);
        edge.set_target(target);
        self.add_edge(edge)?;
        Ok(id)
    }

    /// Stores a private copy of a node label prototype under a name.
    pub fn add_node_label_template(&mut self, name: &str, label: NodeLabel) {
        self.node_label_templates.insert(name.to_string(), label);
    }

    /// Returns a fresh deep copy of a stored node label template.
    pub fn node_label_template(&self, name: &str) -> Option<NodeLabel> {
        self.node_label_templates.get(name).cloned()
    }

    /// Stores a private copy of an edge label prototype under a name.
    pub fn add_edge_label_template(&mut self, name: &str, label: EdgeLabel) {
        self.edge_label_templates.insert(name.to_string(), label);
    }

    /// Returns a fresh deep copy of a stored edge label template.
    pub fn edge_label_template(&self, name: &str) -> Option<EdgeLabel> {
        self.edge_label_templates.get(name).cloned()
    }
}
