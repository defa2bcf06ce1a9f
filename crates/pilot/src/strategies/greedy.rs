//! Greedy-score strategy: shortest hop path to the nearest pellet.
//!
//! Breadth-first over the permitted-edge graph, accepting the first node
//! within the arrival radius of any active pellet. Ghosts are ignored
//! entirely: this strategy optimizes throughput, not survival.

use std::collections::{HashSet, VecDeque};

use maze_core::{Direction, GraphOracle, Node, NodeKey, Pellet};

use crate::api::{DirectionProvider, StrategyKind};
use crate::context::PilotContext;
use crate::plan::PlanCache;
use crate::traversal;

pub struct GreedyPilot {
    cache: PlanCache,
}

impl GreedyPilot {
    pub fn new() -> Self {
        Self {
            cache: PlanCache::new(),
        }
    }
}

impl Default for GreedyPilot {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionProvider for GreedyPilot {
    fn strategy(&self) -> StrategyKind {
        StrategyKind::GreedyScore
    }

    fn next_direction(&mut self, ctx: &PilotContext<'_>) -> Direction {
        if ctx.active_pellets().next().is_none() {
            self.cache.clear();
            return Direction::Stop;
        }
        let Some(node) = ctx.effective_node() else {
            return Direction::Stop;
        };
        let Some(graph) = ctx.graph() else {
            return Direction::Stop;
        };

        let effective = node.key();
        if self.cache.needs_replan(ctx, effective) {
            match find_nearest(graph, ctx, node) {
                Some((path, goal)) => {
                    tracing::debug!(%goal, steps = path.len(), "greedy replan");
                    self.cache.install(path, Some(goal), effective);
                }
                None => self.cache.clear(),
            }
        }

        if let Some(direction) = self.cache.next() {
            return direction;
        }

        traversal::first_exit(graph, node)
    }
}

fn pellet_near<'a>(ctx: &PilotContext<'a>, node: &Node) -> Option<&'a Pellet> {
    ctx.active_pellets()
        .find(|pellet| traversal::is_at_goal(node, pellet.position))
}

/// Breadth-first expansion from `start`, returning the hop-shortest path to
/// the first node satisfying the goal test for any active pellet, along with
/// that pellet's node key.
///
/// The queue is seeded with the start node's exits rather than the start
/// itself, so a pellet directly under the character never produces a
/// degenerate empty plan.
fn find_nearest(
    graph: &dyn GraphOracle,
    ctx: &PilotContext<'_>,
    start: &Node,
) -> Option<(Vec<Direction>, NodeKey)> {
    let mut visited: HashSet<NodeKey> = HashSet::from([start.key()]);
    let mut queue: VecDeque<(NodeKey, Vec<Direction>)> = VecDeque::new();

    for (neighbor, direction) in traversal::neighbors(graph, start) {
        if let Some(pellet) = pellet_near(ctx, neighbor) {
            return Some((vec![direction], pellet.node_key()));
        }
        queue.push_back((neighbor.key(), vec![direction]));
    }

    while let Some((key, path)) = queue.pop_front() {
        if !visited.insert(key) {
            continue;
        }
        let Some(node) = graph.node(key) else {
            continue;
        };

        for (neighbor, direction) in traversal::neighbors(graph, node) {
            let neighbor_key = neighbor.key();
            if visited.contains(&neighbor_key) {
                continue;
            }

            let mut next_path = path.clone();
            next_path.push(direction);
            if let Some(pellet) = pellet_near(ctx, neighbor) {
                return Some((next_path, pellet.node_key()));
            }
            queue.push_back((neighbor_key, next_path));
        }
    }

    None
}
