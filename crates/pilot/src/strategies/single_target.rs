//! Single-target strategy: shortest hop path to the one remaining pellet.
//!
//! Used when the board is constrained to a single pellet. Same breadth-first
//! machinery as the greedy strategy, but aimed at one known target instead of
//! "any pellet".

use std::collections::{HashSet, VecDeque};

use maze_core::{Direction, GraphOracle, Node, Vec2};

use crate::api::{DirectionProvider, StrategyKind};
use crate::context::PilotContext;
use crate::plan::PlanCache;
use crate::traversal;

pub struct SingleTargetPilot {
    cache: PlanCache,
}

impl SingleTargetPilot {
    pub fn new() -> Self {
        Self {
            cache: PlanCache::new(),
        }
    }
}

impl Default for SingleTargetPilot {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionProvider for SingleTargetPilot {
    fn strategy(&self) -> StrategyKind {
        StrategyKind::SingleTarget
    }

    fn next_direction(&mut self, ctx: &PilotContext<'_>) -> Direction {
        let Some(pellet) = ctx.active_pellets().next() else {
            self.cache.clear();
            return Direction::Stop;
        };
        let Some(node) = ctx.effective_node() else {
            return Direction::Stop;
        };
        let Some(graph) = ctx.graph() else {
            return Direction::Stop;
        };

        let effective = node.key();
        if self.cache.needs_replan(ctx, effective) {
            let path = find_path(graph, node, pellet.position);
            tracing::debug!(goal = %pellet.node_key(), steps = path.len(), "single-target replan");
            self.cache
                .install(path, Some(pellet.node_key()), effective);
        }

        if let Some(direction) = self.cache.next() {
            return direction;
        }

        traversal::first_exit(graph, node)
    }
}

/// Breadth-first hop-shortest path from `start` to `target`. Already being
/// at the goal is special-cased before anything is enqueued; unreachable
/// targets yield an empty path.
fn find_path(graph: &dyn GraphOracle, start: &Node, target: Vec2) -> Vec<Direction> {
    if traversal::is_at_goal(start, target) {
        return Vec::new();
    }

    let mut visited: HashSet<maze_core::NodeKey> = HashSet::new();
    let mut queue: VecDeque<(maze_core::NodeKey, Vec<Direction>)> =
        VecDeque::from([(start.key(), Vec::new())]);

    while let Some((key, path)) = queue.pop_front() {
        if !visited.insert(key) {
            continue;
        }
        let Some(node) = graph.node(key) else {
            continue;
        };

        if traversal::is_at_goal(node, target) {
            return path;
        }

        for (neighbor, direction) in traversal::neighbors(graph, node) {
            let neighbor_key = neighbor.key();
            if visited.contains(&neighbor_key) {
                continue;
            }
            let mut next_path = path.clone();
            next_path.push(direction);
            queue.push_back((neighbor_key, next_path));
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use maze_core::{Env, GhostSnapshot, Pellet, PelletKind, PelletSnapshot};

    use super::*;
    use crate::testutil;

    #[test]
    fn reaches_the_lone_pellet_in_minimum_hops() {
        let graph = testutil::grid(4, 4);
        let mut pellets = PelletSnapshot::new();
        pellets.push(Pellet::new(testutil::at(3, 1), PelletKind::Regular));
        let ghosts = GhostSnapshot::new();
        let actor = testutil::actor_on(testutil::key(0, 0));
        let env = Env::with_all(&graph, &pellets, &ghosts);
        let ctx = PilotContext::new(&actor, env.into_maze_env());

        let node = ctx.effective_node().unwrap();
        let path = find_path(&graph, node, testutil::at(3, 1));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn already_at_goal_plans_nothing() {
        let graph = testutil::grid(2, 1);
        let node = graph.node(testutil::key(0, 0)).unwrap();
        assert!(find_path(&graph, node, testutil::at(0, 0)).is_empty());
    }

    #[test]
    fn empty_collection_stops() {
        let graph = testutil::grid(2, 1);
        let pellets = PelletSnapshot::new();
        let ghosts = GhostSnapshot::new();
        let actor = testutil::actor_on(testutil::key(0, 0));
        let env = Env::with_all(&graph, &pellets, &ghosts);
        let ctx = PilotContext::new(&actor, env.into_maze_env());

        let mut pilot = SingleTargetPilot::new();
        assert_eq!(pilot.next_direction(&ctx), Direction::Stop);
    }

    #[test]
    fn unreachable_pellet_wanders_instead_of_stalling() {
        let mut graph = testutil::grid(2, 1);
        graph.insert(Vec2::new(640.0, 640.0));
        let mut pellets = PelletSnapshot::new();
        pellets.push(Pellet::new(Vec2::new(640.0, 640.0), PelletKind::Regular));
        let ghosts = GhostSnapshot::new();
        let actor = testutil::actor_on(testutil::key(0, 0));
        let env = Env::with_all(&graph, &pellets, &ghosts);
        let ctx = PilotContext::new(&actor, env.into_maze_env());

        let mut pilot = SingleTargetPilot::new();
        assert_eq!(pilot.next_direction(&ctx), Direction::Right);
    }
}
