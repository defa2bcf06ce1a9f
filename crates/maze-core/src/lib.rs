//! World model and read-only oracle interfaces for the maze autopilot.
//!
//! `maze-core` defines the canonical data types (directions, nodes, pellets,
//! ghosts, the controlled character) and the oracle traits through which the
//! decision engine observes the world. The host loop owns and mutates all of
//! this data; the pilot crate only reads it through the [`env::Env`] aggregate
//! during its per-tick direction query.
pub mod config;
pub mod env;
pub mod state;

pub use config::MazeConfig;
pub use env::{
    Edge, EntityClass, EntityClassSet, Env, GhostOracle, GhostSnapshot, GraphOracle,
    GraphSnapshot, MazeEnv, Node, OracleError, PelletOracle, PelletSnapshot,
};
pub use state::{ActorState, Direction, GhostMode, GhostState, NodeKey, Pellet, PelletKind, Vec2};
