use crate::state::GhostState;

/// Read-only view of the host-owned ghost roster.
pub trait GhostOracle: Send + Sync {
    fn ghosts(&self) -> &[GhostState];
}
