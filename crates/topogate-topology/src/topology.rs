//! Cluster topology — the aggregate the wizard session mutates.
//!
//! Owns the scope mode, the ordered candidate node list, and the
//! derived role counts. Every mutating method recounts before it
//! returns, so `role_counts()` is always consistent with the node
//! list (no batching, no deferred recompute).

use serde::Serialize;
use tracing::{debug, info};

use crate::counter::recount;
use crate::editor;
use crate::error::{TopologyError, TopologyResult};
use crate::types::{Node, RoleCounts, RoleKind, ScopeMode};

/// The full topology of a provisioning session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClusterTopology {
    scope_mode: ScopeMode,
    nodes: Vec<Node>,
    counts: RoleCounts,
}

impl ClusterTopology {
    /// Create an empty topology in the default (dedicated) scope.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope_mode(&self) -> ScopeMode {
        self.scope_mode
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Derived per-role tallies, current as of the last mutation.
    pub fn role_counts(&self) -> RoleCounts {
        self.counts
    }

    /// Replace the candidate list (initial load from the inventory).
    pub fn load_nodes(&mut self, nodes: Vec<Node>) {
        info!(count = nodes.len(), "loaded candidate nodes");
        self.nodes = nodes;
        self.counts = recount(&self.nodes);
    }

    /// Append a candidate machine.
    pub fn add_node(&mut self, node: Node) -> TopologyResult<()> {
        if self.nodes.iter().any(|n| n.id == node.id) {
            return Err(TopologyError::DuplicateNode(node.id));
        }
        debug!(node = %node.id, "added candidate node");
        self.nodes.push(node);
        self.counts = recount(&self.nodes);
        Ok(())
    }

    /// Discard a candidate machine, returning it.
    pub fn remove_node(&mut self, id: &str) -> TopologyResult<Node> {
        let idx = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| TopologyError::NodeNotFound(id.to_string()))?;
        let node = self.nodes.remove(idx);
        debug!(node = %node.id, "removed candidate node");
        self.counts = recount(&self.nodes);
        Ok(node)
    }

    /// Toggle a single role on a node (strict toggle).
    pub fn toggle_role(&mut self, id: &str, role: RoleKind) -> TopologyResult<()> {
        let node = self.node_mut(id)?;
        editor::toggle_role(node, role);
        self.counts = recount(&self.nodes);
        Ok(())
    }

    /// Toggle a node between all roles and no roles.
    pub fn toggle_all_roles(&mut self, id: &str) -> TopologyResult<()> {
        let node = self.node_mut(id)?;
        editor::toggle_all_roles(node);
        self.counts = recount(&self.nodes);
        Ok(())
    }

    /// Switch scope mode.
    ///
    /// On an actual change, every node's role set is cleared: the
    /// safety rules differ per mode, so prior assignments are presumed
    /// unsafe and must be redone. Re-assigning the current mode leaves
    /// assignments untouched.
    pub fn set_scope_mode(&mut self, mode: ScopeMode) {
        if mode == self.scope_mode {
            debug!(mode = ?mode, "scope mode unchanged");
            return;
        }
        self.scope_mode = mode;
        for node in &mut self.nodes {
            node.roles.clear();
        }
        self.counts = recount(&self.nodes);
        info!(
            mode = ?mode,
            cleared = self.nodes.len(),
            "scope mode changed, role assignments reset"
        );
    }

    fn node_mut(&mut self, id: &str) -> TopologyResult<&mut Node> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| TopologyError::NodeNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topology_with(ids: &[&str]) -> ClusterTopology {
        let mut topo = ClusterTopology::new();
        topo.load_nodes(ids.iter().map(|id| Node::new(*id)).collect());
        topo
    }

    fn assert_counts_consistent(topo: &ClusterTopology) {
        let counts = topo.role_counts();
        for role in RoleKind::ALL {
            let expected = topo
                .nodes()
                .iter()
                .filter(|n| n.roles.contains(&role))
                .count() as u32;
            assert_eq!(counts.get(role), expected, "role {}", role.as_str());
        }
    }

    #[test]
    fn new_topology_is_empty_and_dedicated() {
        let topo = ClusterTopology::new();
        assert_eq!(topo.scope_mode(), ScopeMode::Dedicated);
        assert!(topo.nodes().is_empty());
        assert_eq!(topo.role_counts(), RoleCounts::default());
    }

    #[test]
    fn toggle_role_updates_counts_synchronously() {
        let mut topo = topology_with(&["n1", "n2"]);

        topo.toggle_role("n1", RoleKind::Etcd).unwrap();
        assert_eq!(topo.role_counts().etcd, 1);
        assert_counts_consistent(&topo);

        topo.toggle_role("n2", RoleKind::Etcd).unwrap();
        assert_eq!(topo.role_counts().etcd, 2);

        topo.toggle_role("n1", RoleKind::Etcd).unwrap();
        assert_eq!(topo.role_counts().etcd, 1);
        assert_counts_consistent(&topo);
    }

    #[test]
    fn toggle_all_roles_counts_every_role() {
        let mut topo = topology_with(&["n1"]);
        topo.toggle_all_roles("n1").unwrap();

        let counts = topo.role_counts();
        assert_eq!(counts.etcd, 1);
        assert_eq!(counts.controlplane, 1);
        assert_eq!(counts.worker, 1);

        topo.toggle_all_roles("n1").unwrap();
        assert_eq!(topo.role_counts(), RoleCounts::default());
    }

    #[test]
    fn unknown_node_is_an_error() {
        let mut topo = topology_with(&["n1"]);
        assert!(matches!(
            topo.toggle_role("ghost", RoleKind::Worker),
            Err(TopologyError::NodeNotFound(_))
        ));
        assert!(matches!(
            topo.toggle_all_roles("ghost"),
            Err(TopologyError::NodeNotFound(_))
        ));
        assert!(matches!(
            topo.remove_node("ghost"),
            Err(TopologyError::NodeNotFound(_))
        ));
    }

    #[test]
    fn duplicate_add_is_an_error() {
        let mut topo = topology_with(&["n1"]);
        assert!(matches!(
            topo.add_node(Node::new("n1")),
            Err(TopologyError::DuplicateNode(_))
        ));
    }

    #[test]
    fn add_and_remove_keep_counts_consistent() {
        let mut topo = ClusterTopology::new();

        let mut node = Node::new("n1");
        node.roles = RoleKind::ALL.into_iter().collect();
        topo.add_node(node).unwrap();
        assert_eq!(topo.role_counts().worker, 1);
        assert_counts_consistent(&topo);

        topo.add_node(Node::new("n2")).unwrap();
        topo.toggle_role("n2", RoleKind::Worker).unwrap();
        assert_eq!(topo.role_counts().worker, 2);

        let removed = topo.remove_node("n1").unwrap();
        assert!(removed.has_all_roles());
        assert_eq!(topo.role_counts().etcd, 0);
        assert_eq!(topo.role_counts().worker, 1);
        assert_counts_consistent(&topo);
    }

    #[test]
    fn scope_change_clears_every_assignment() {
        let mut topo = topology_with(&["n1", "n2", "n3"]);
        topo.toggle_all_roles("n1").unwrap();
        topo.toggle_role("n2", RoleKind::Worker).unwrap();

        topo.set_scope_mode(ScopeMode::Unified);

        assert_eq!(topo.scope_mode(), ScopeMode::Unified);
        assert!(topo.nodes().iter().all(|n| n.roles.is_empty()));
        assert_eq!(topo.role_counts(), RoleCounts::default());
    }

    #[test]
    fn scope_reassignment_is_a_no_op() {
        let mut topo = topology_with(&["n1"]);
        topo.toggle_all_roles("n1").unwrap();

        topo.set_scope_mode(ScopeMode::Dedicated);

        assert!(topo.nodes()[0].has_all_roles());
        assert_eq!(topo.role_counts().etcd, 1);
    }

    #[test]
    fn load_nodes_replaces_list_and_recounts() {
        let mut topo = topology_with(&["old"]);
        topo.toggle_all_roles("old").unwrap();

        let mut replacement = Node::new("new");
        replacement.roles.insert(RoleKind::Worker);
        topo.load_nodes(vec![replacement]);

        assert_eq!(topo.nodes().len(), 1);
        assert_eq!(topo.role_counts().worker, 1);
        assert_eq!(topo.role_counts().etcd, 0);
    }
}
