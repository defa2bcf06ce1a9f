//! Ghost threat scoring.
//!
//! Pure functions over the ghost roster and an arbitrary candidate position.
//! The same scores drive edge costs in the weighted search, pellet goal
//! selection, and the survival strategy's flee override, so the function is
//! deliberately position-based rather than node-based.

use maze_core::{Direction, GhostMode, GhostState, GraphOracle, MazeConfig, Node, Vec2};

use crate::traversal;

/// Danger at or above this level triggers the survival strategy's flee
/// override and disqualifies a cached step.
pub const FLEE_THRESHOLD: f32 = 10_000.0;

/// Hostile contribution bands keyed on squared distance. Each band is an
/// order of magnitude apart so proximity dominates every other cost term.
const HOSTILE_BANDS: [(f32, f32); 5] = [
    (MazeConfig::tile_radius_sq(2.0), 100_000.0),
    (MazeConfig::tile_radius_sq(4.0), 50_000.0),
    (MazeConfig::tile_radius_sq(6.0), 10_000.0),
    (MazeConfig::tile_radius_sq(8.0), 1_000.0),
    (MazeConfig::tile_radius_sq(10.0), 100.0),
];

/// Frightened ghosts pull the character in rather than pushing it away.
const FRIGHTENED_RADIUS_SQ: f32 = MazeConfig::tile_radius_sq(8.0);
const FRIGHTENED_PULL: f32 = -2_000.0;

/// Total threat contribution of all ghosts at `position`.
///
/// Hostile ghosts add a banded positive cost, frightened ghosts a negative
/// incentive, and spawn-returning ghosts contribute nothing at any distance.
pub fn danger_at(ghosts: &[GhostState], position: Vec2) -> f32 {
    let mut danger = 0.0;
    for ghost in ghosts {
        let dist_sq = (ghost.position - position).magnitude_squared();
        match ghost.mode {
            GhostMode::Returning => {}
            GhostMode::Frightened => {
                if dist_sq < FRIGHTENED_RADIUS_SQ {
                    danger += FRIGHTENED_PULL;
                }
            }
            GhostMode::Hostile => {
                for &(radius_sq, cost) in &HOSTILE_BANDS {
                    if dist_sq < radius_sq {
                        danger += cost;
                        break;
                    }
                }
            }
        }
    }
    danger
}

/// Whether any hostile ghost sits within the squared radius of `position`.
pub fn hostile_within(ghosts: &[GhostState], position: Vec2, radius_sq: f32) -> bool {
    ghosts.iter().any(|ghost| {
        ghost.mode == GhostMode::Hostile
            && (ghost.position - position).magnitude_squared() < radius_sq
    })
}

/// Exit of `node` with the lowest danger, scanned in canonical order so ties
/// resolve deterministically. `Stop` with infinite danger for a dead node.
pub fn safest_exit(
    graph: &dyn GraphOracle,
    node: &Node,
    ghosts: &[GhostState],
) -> (Direction, f32) {
    let mut best = (Direction::Stop, f32::INFINITY);
    for (neighbor, direction) in traversal::neighbors(graph, node) {
        let danger = danger_at(ghosts, neighbor.position());
        if danger < best.1 {
            best = (direction, danger);
        }
    }
    best
}
