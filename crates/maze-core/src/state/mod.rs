//! Dynamic world state observed by the pilot each tick.
mod actor;
mod common;
mod pellet;

pub use actor::{ActorState, GhostMode, GhostState};
pub use common::{Direction, NodeKey, Vec2};
pub use pellet::{Pellet, PelletKind};
