//! Role counter — derives per-role tallies from the node list.

use crate::types::{Node, RoleCounts};

/// Tally role membership across all nodes.
///
/// Pure function of the node list: counts start at zero and every
/// (node, role) membership contributes one increment. Callers store
/// the result after every mutation so reads never observe stale
/// counts.
pub fn recount(nodes: &[Node]) -> RoleCounts {
    let mut counts = RoleCounts::default();
    for node in nodes {
        for role in &node.roles {
            counts.bump(*role);
        }
    }
    counts
}
