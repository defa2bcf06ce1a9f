//! Oracle access errors.

/// Errors that occur when a direction query needs an oracle the host did not
/// provide. These never cross the pilot's public API; a missing oracle
/// degrades the query to a `Stop` direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// GraphOracle is not available in the environment.
    #[error("GraphOracle not available")]
    GraphNotAvailable,

    /// PelletOracle is not available in the environment.
    #[error("PelletOracle not available")]
    PelletsNotAvailable,

    /// GhostOracle is not available in the environment.
    #[error("GhostOracle not available")]
    GhostsNotAvailable,
}
