//! Domain types for the cluster topology.
//!
//! These types describe the candidate machines of a provisioning
//! session and the roles assigned to them. `RoleCounts` is derived
//! state: it is recomputed from the node list after every mutation
//! and is never edited directly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unique identifier for a candidate node.
pub type NodeId = String;

/// A role a node can carry in the cluster.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    Etcd,
    Controlplane,
    Worker,
}

impl RoleKind {
    /// All roles, in display order (etcd → controlplane → worker).
    pub const ALL: [RoleKind; 3] = [RoleKind::Etcd, RoleKind::Controlplane, RoleKind::Worker];

    /// Stable identifier used in logs and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Etcd => "etcd",
            RoleKind::Controlplane => "controlplane",
            RoleKind::Worker => "worker",
        }
    }
}

/// How roles may be laid out across nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScopeMode {
    /// Roles must be separated across nodes; etcd quorum and a
    /// dedicated control plane are required.
    #[default]
    Dedicated,
    /// Roles may be co-located; only worker capacity is required.
    Unified,
}

/// A candidate machine in the provisioning session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Reachable address of the machine (display-only for the engine).
    pub address: String,
    /// Machine state as reported by the inventory (display-only).
    pub state: String,
    /// Roles currently assigned to this node.
    pub roles: BTreeSet<RoleKind>,
}

impl Node {
    /// Create a node with no roles assigned.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            address: String::new(),
            state: String::new(),
            roles: BTreeSet::new(),
        }
    }

    /// True if all three roles are assigned.
    pub fn has_all_roles(&self) -> bool {
        self.roles.len() == RoleKind::ALL.len()
    }
}

/// Per-role node tallies, derived from the node list.
///
/// Holds the count of nodes carrying each role (a node with all three
/// roles contributes to all three counts). The safety predicates
/// mirror what the validator checks per role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub etcd: u32,
    pub controlplane: u32,
    pub worker: u32,
}

impl RoleCounts {
    pub fn get(&self, role: RoleKind) -> u32 {
        match role {
            RoleKind::Etcd => self.etcd,
            RoleKind::Controlplane => self.controlplane,
            RoleKind::Worker => self.worker,
        }
    }

    pub(crate) fn bump(&mut self, role: RoleKind) {
        match role {
            RoleKind::Etcd => self.etcd += 1,
            RoleKind::Controlplane => self.controlplane += 1,
            RoleKind::Worker => self.worker += 1,
        }
    }

    /// Quorum-safe etcd count: an odd count of 1, 3, or 5 so a
    /// majority can always be determined for leader election.
    pub fn etcd_safe(&self) -> bool {
        matches!(self.etcd, 1 | 3 | 5)
    }

    /// At least one control-plane node.
    pub fn controlplane_safe(&self) -> bool {
        self.controlplane >= 1
    }

    /// At least one worker node.
    pub fn worker_safe(&self) -> bool {
        self.worker >= 1
    }
}
