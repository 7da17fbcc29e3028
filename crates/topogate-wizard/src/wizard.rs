//! Provisioning wizard session.
//!
//! One `ProvisioningWizard` per wizard session: it owns the mutable
//! topology, answers validation queries from the current derived
//! counts, and drives the save handshake once the cluster resource is
//! persisted. Collaborator seams (readiness waiter, completion
//! callback) are injected explicitly at construction/setup time.

use tracing::info;

use topogate_save::{CompletionCallback, ReadinessWaiter, SaveLifecycle};
use topogate_topology::{ClusterTopology, Node, RoleCounts, RoleKind, ScopeMode, TopologyResult};
use topogate_validate::{validate, ValidationError};

use crate::error::{WizardError, WizardResult};

pub struct ProvisioningWizard {
    topology: ClusterTopology,
    save: SaveLifecycle,
}

impl ProvisioningWizard {
    /// Start a session with an empty topology in dedicated scope.
    pub fn new(readiness: ReadinessWaiter) -> Self {
        Self {
            topology: ClusterTopology::new(),
            save: SaveLifecycle::new(readiness),
        }
    }

    pub fn topology(&self) -> &ClusterTopology {
        &self.topology
    }

    // ── Node list and role assignment ─────────────────────────────

    pub fn load_nodes(&mut self, nodes: Vec<Node>) {
        self.topology.load_nodes(nodes);
    }

    pub fn add_node(&mut self, node: Node) -> TopologyResult<()> {
        self.topology.add_node(node)
    }

    pub fn remove_node(&mut self, id: &str) -> TopologyResult<Node> {
        self.topology.remove_node(id)
    }

    pub fn toggle_role(&mut self, id: &str, role: RoleKind) -> TopologyResult<()> {
        self.topology.toggle_role(id, role)
    }

    pub fn toggle_all_roles(&mut self, id: &str) -> TopologyResult<()> {
        self.topology.toggle_all_roles(id)
    }

    pub fn set_scope_mode(&mut self, mode: ScopeMode) {
        self.topology.set_scope_mode(mode);
    }

    // ── Derived state for display ─────────────────────────────────

    pub fn role_counts(&self) -> RoleCounts {
        self.topology.role_counts()
    }

    /// Current rule violations, in display order.
    pub fn validate(&self) -> Vec<ValidationError> {
        validate(self.topology.scope_mode(), &self.topology.role_counts())
    }

    /// True iff the topology is deployable and save may run.
    pub fn may_proceed(&self) -> bool {
        self.validate().is_empty()
    }

    // ── Save handshake ────────────────────────────────────────────

    /// Register the completion callback; must happen during setup,
    /// before any save is triggered.
    pub fn register_completion(&mut self, callback: CompletionCallback) {
        self.save.register_completion(callback);
    }

    /// Finish the save of an already-persisted cluster resource.
    ///
    /// Refuses to run while validation errors exist, then drives the
    /// readiness/completion handshake. On success the caller owns any
    /// follow-on navigation.
    pub async fn finish_save(&self, resource_id: &str) -> WizardResult<()> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(WizardError::TopologyUnsafe(errors));
        }

        self.save.did_save(resource_id).await?;
        info!(resource = resource_id, "cluster save finished");
        Ok(())
    }
}

impl std::fmt::Debug for ProvisioningWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisioningWizard")
            .field("topology", &self.topology)
            .field("save", &self.save)
            .finish()
    }
}
