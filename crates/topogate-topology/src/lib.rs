//! topogate-topology — candidate nodes and role assignment for the
//! cluster-provisioning wizard.
//!
//! The wizard assigns roles (etcd, controlplane, worker) to candidate
//! machines before a multi-node cluster is created. This crate owns
//! the mutable side of that session:
//!
//! - `ClusterTopology` — scope mode + ordered node list + derived counts
//! - `counter::recount` — pure per-role tally over the node list
//! - `editor` — single-node role toggles
//!
//! Every mutation recounts synchronously before returning, so readers
//! never observe counts that disagree with the node list. Validation
//! of the resulting counts lives in `topogate-validate`.

pub mod counter;
pub mod editor;
pub mod error;
pub mod topology;
pub mod types;

pub use error::{TopologyError, TopologyResult};
pub use topology::ClusterTopology;
pub use types::{Node, NodeId, RoleCounts, RoleKind, ScopeMode};
