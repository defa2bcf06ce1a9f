//! Decision engine steering the maze character.
//!
//! The pilot answers one question per simulation tick: which direction should
//! the character move next. Strategies differ in how they weigh pellet
//! collection against ghost threat, but they share the traversal utilities,
//! the threat model, and the cached-plan replan policy.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the types the host loop interacts with
//! - [`context`] bundles the per-tick world view handed to a query
//! - [`traversal`] holds the shared graph-walk utilities
//! - [`threat`] scores ghost danger for arbitrary positions
//! - [`plan`] owns the cached path and the replan policy
//! - [`strategies`] implements the survival, greedy-score, and single-target pilots
//! - [`factory`] builds a boxed provider from a [`api::StrategyKind`]
pub mod api;
pub mod context;
pub mod factory;
pub mod plan;
pub mod strategies;
pub mod threat;
pub mod traversal;

pub use api::{DirectionProvider, StrategyKind};
pub use context::PilotContext;
pub use factory::create_pilot;
pub use plan::PlanCache;
pub use strategies::{GreedyPilot, SingleTargetPilot, SurvivalPilot};

#[cfg(test)]
pub(crate) mod testutil {
    use maze_core::{
        ActorState, Direction, EntityClassSet, GraphSnapshot, MazeConfig, NodeKey, Vec2,
    };

    /// Fixture mazes space their nodes two tile-widths apart so the arrival
    /// radius (1.5 tiles) never swallows a neighboring node.
    pub(crate) const SPACING: f32 = 2.0 * MazeConfig::TILE_WIDTH;

    pub(crate) fn key(col: i32, row: i32) -> NodeKey {
        NodeKey::new((col as f32 * SPACING) as i32, (row as f32 * SPACING) as i32)
    }

    pub(crate) fn at(col: i32, row: i32) -> Vec2 {
        Vec2::new(col as f32 * SPACING, row as f32 * SPACING)
    }

    /// Fully connected `cols` x `rows` lattice, all edges open to everyone.
    pub(crate) fn grid(cols: i32, rows: i32) -> GraphSnapshot {
        let access = EntityClassSet::PACMAN | EntityClassSet::GHOST;
        let mut graph = GraphSnapshot::new();
        for row in 0..rows {
            for col in 0..cols {
                graph.insert(at(col, row));
            }
        }
        for row in 0..rows {
            for col in 0..cols {
                if col + 1 < cols {
                    graph.connect_both(key(col, row), Direction::Right, key(col + 1, row), access);
                }
                if row + 1 < rows {
                    graph.connect_both(key(col, row), Direction::Down, key(col, row + 1), access);
                }
            }
        }
        graph
    }

    pub(crate) fn actor_on(k: NodeKey) -> ActorState {
        ActorState::new(Vec2::new(k.x as f32, k.y as f32), Some(k), None)
    }
}
