use crate::state::Pellet;

/// Read-only view of the host-owned pellet collection.
///
/// The host removes or deactivates entries as they are consumed; the pilot
/// observes the collection fresh on every query.
pub trait PelletOracle: Send + Sync {
    /// Full pellet list, including entries the host has deactivated.
    fn pellets(&self) -> &[Pellet];

    fn any_active(&self) -> bool {
        self.pellets().iter().any(|pellet| pellet.active)
    }
}
