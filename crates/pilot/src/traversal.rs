//! Shared graph-walk utilities used by every strategy.

use std::collections::HashMap;

use arrayvec::ArrayVec;
use maze_core::{Direction, EntityClass, GraphOracle, MazeConfig, Node, NodeKey, Vec2};

/// Predecessor chain recorded during a search: child key -> (parent key,
/// direction taken from the parent).
pub type Predecessors = HashMap<NodeKey, (NodeKey, Direction)>;

/// Neighbors of `node` the controlled character may move to, paired with the
/// outgoing direction, in canonical `UP, LEFT, DOWN, RIGHT` order. Dangling
/// edges and edges closed to the character are excluded.
pub fn neighbors<'a>(
    graph: &'a dyn GraphOracle,
    node: &Node,
) -> ArrayVec<(&'a Node, Direction), 4> {
    let mut out = ArrayVec::new();
    for direction in Direction::TRAVERSAL_ORDER {
        if !graph.permitted(node, direction, EntityClass::Pacman) {
            continue;
        }
        if let Some(neighbor) = graph.neighbor(node, direction) {
            out.push((neighbor, direction));
        }
    }
    out
}

/// Whether `node` counts as having arrived at `target`. Squared-distance
/// comparison against the fixed arrival radius; exact key equality is never
/// required, which tolerates the character being queried mid-edge.
pub fn is_at_goal(node: &Node, target: Vec2) -> bool {
    (node.position() - target).magnitude_squared() < MazeConfig::GOAL_RADIUS_SQ
}

/// Walks the predecessor chain from `goal` back to `start` and returns the
/// directions in start-to-goal order. Empty when `goal` equals `start`.
pub fn reconstruct_path(came_from: &Predecessors, start: NodeKey, goal: NodeKey) -> Vec<Direction> {
    if goal == start {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = goal;
    while let Some(&(parent, direction)) = came_from.get(&current) {
        path.push(direction);
        if parent == start {
            break;
        }
        current = parent;
    }
    path.reverse();
    path
}

/// First permitted exit in canonical order, or `Stop` for a dead node.
/// The unweighted strategies use this as their no-path fallback.
pub fn first_exit(graph: &dyn GraphOracle, node: &Node) -> Direction {
    neighbors(graph, node)
        .first()
        .map(|&(_, direction)| direction)
        .unwrap_or(Direction::Stop)
}
