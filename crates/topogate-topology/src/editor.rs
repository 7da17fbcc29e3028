//! Node role editor — single-node role toggles.
//!
//! Both operations act on one node; the owning `ClusterTopology`
//! recounts immediately after applying them.

use tracing::debug;

use crate::types::{Node, RoleKind};

/// Toggle between "all roles" and "no roles".
///
/// A node with all three roles is cleared; any other state (including
/// a partial assignment) jumps straight to the full set.
pub fn toggle_all_roles(node: &mut Node) {
    if node.has_all_roles() {
        node.roles.clear();
        debug!(node = %node.id, "cleared all roles");
    } else {
        node.roles = RoleKind::ALL.into_iter().collect();
        debug!(node = %node.id, "assigned all roles");
    }
}

/// Strict toggle of a single role (symmetric difference with `{role}`).
///
/// Applying the same toggle twice restores the original set.
pub fn toggle_role(node: &mut Node, role: RoleKind) {
    let enabled = if node.roles.contains(&role) {
        node.roles.remove(&role);
        false
    } else {
        node.roles.insert(role);
        true
    };
    debug!(node = %node.id, role = role.as_str(), enabled, "toggled role");
}
