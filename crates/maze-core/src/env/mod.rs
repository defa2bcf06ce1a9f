//! Traits describing read-only world data.
//!
//! Oracles expose the static maze graph, the pellet collection, and the ghost
//! roster. The [`Env`] aggregate bundles them so the pilot can observe
//! everything it needs without hard coupling to concrete implementations.
mod error;
mod ghosts;
mod graph;
mod pellets;
mod snapshot;

pub use error::OracleError;
pub use ghosts::GhostOracle;
pub use graph::{Edge, EntityClass, EntityClassSet, GraphOracle, Node};
pub use pellets::PelletOracle;
pub use snapshot::{GhostSnapshot, GraphSnapshot, PelletSnapshot};

/// Aggregates the read-only oracles required by a direction query.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, G, P, H>
where
    G: GraphOracle + ?Sized,
    P: PelletOracle + ?Sized,
    H: GhostOracle + ?Sized,
{
    graph: Option<&'a G>,
    pellets: Option<&'a P>,
    ghosts: Option<&'a H>,
}

pub type MazeEnv<'a> = Env<'a, dyn GraphOracle + 'a, dyn PelletOracle + 'a, dyn GhostOracle + 'a>;

impl<'a, G, P, H> Env<'a, G, P, H>
where
    G: GraphOracle + ?Sized,
    P: PelletOracle + ?Sized,
    H: GhostOracle + ?Sized,
{
    pub fn new(graph: Option<&'a G>, pellets: Option<&'a P>, ghosts: Option<&'a H>) -> Self {
        Self {
            graph,
            pellets,
            ghosts,
        }
    }

    pub fn with_all(graph: &'a G, pellets: &'a P, ghosts: &'a H) -> Self {
        Self::new(Some(graph), Some(pellets), Some(ghosts))
    }

    pub fn empty() -> Self {
        Self {
            graph: None,
            pellets: None,
            ghosts: None,
        }
    }

    /// Returns the graph oracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::GraphNotAvailable` if no graph oracle was provided.
    pub fn graph(&self) -> Result<&'a G, OracleError> {
        self.graph.ok_or(OracleError::GraphNotAvailable)
    }

    /// Returns the pellet oracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PelletsNotAvailable` if no pellet oracle was provided.
    pub fn pellets(&self) -> Result<&'a P, OracleError> {
        self.pellets.ok_or(OracleError::PelletsNotAvailable)
    }

    /// Returns the ghost oracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::GhostsNotAvailable` if no ghost oracle was provided.
    pub fn ghosts(&self) -> Result<&'a H, OracleError> {
        self.ghosts.ok_or(OracleError::GhostsNotAvailable)
    }
}

impl<'a, G, P, H> Env<'a, G, P, H>
where
    G: GraphOracle + 'a,
    P: PelletOracle + 'a,
    H: GhostOracle + 'a,
{
    /// Converts this environment into a trait-object based `MazeEnv` (consumes self).
    pub fn into_maze_env(self) -> MazeEnv<'a> {
        let graph: Option<&'a dyn GraphOracle> = self.graph.map(|graph| graph as _);
        let pellets: Option<&'a dyn PelletOracle> = self.pellets.map(|pellets| pellets as _);
        let ghosts: Option<&'a dyn GhostOracle> = self.ghosts.map(|ghosts| ghosts as _);
        Env::new(graph, pellets, ghosts)
    }

    /// Converts this environment into a trait-object based `MazeEnv` (borrows self).
    ///
    /// Use this when the same concrete environment backs several queries.
    pub fn as_maze_env(&self) -> MazeEnv<'a> {
        let graph: Option<&'a dyn GraphOracle> = self.graph.map(|graph| graph as _);
        let pellets: Option<&'a dyn PelletOracle> = self.pellets.map(|pellets| pellets as _);
        let ghosts: Option<&'a dyn GhostOracle> = self.ghosts.map(|ghosts| ghosts as _);
        Env::new(graph, pellets, ghosts)
    }
}
