//! Survival strategy: weighted search that treats ghost proximity as cost.
//!
//! Avoiding ghosts is the first priority; pellets are collected when it is
//! safe to do so. Threat cost dominates the per-edge movement cost by orders
//! of magnitude, so the search is "avoid danger first, shortest path second".

use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use maze_core::{Direction, GraphOracle, MazeConfig, Node, NodeKey, PelletKind, Vec2};

use crate::api::{DirectionProvider, StrategyKind};
use crate::context::PilotContext;
use crate::plan::PlanCache;
use crate::{threat, traversal};

/// Weight on the squared character-to-pellet distance when scoring goals;
/// small enough that any threat band outranks it.
const DISTANCE_WEIGHT: f32 = 0.01;

/// Bonus granted to power pellets while a hostile ghost is close enough to
/// be chasing: run toward the power pellet instead of away from everything.
const POWER_RUSH_BONUS: f32 = -20_000.0;
const POWER_RUSH_RADIUS_SQ: f32 = MazeConfig::tile_radius_sq(12.0);

pub struct SurvivalPilot {
    cache: PlanCache,
}

impl SurvivalPilot {
    pub fn new() -> Self {
        Self {
            cache: PlanCache::new(),
        }
    }
}

impl Default for SurvivalPilot {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionProvider for SurvivalPilot {
    fn strategy(&self) -> StrategyKind {
        StrategyKind::Survival
    }

    fn next_direction(&mut self, ctx: &PilotContext<'_>) -> Direction {
        let Some(node) = ctx.effective_node() else {
            return Direction::Stop;
        };
        let Some(graph) = ctx.graph() else {
            return Direction::Stop;
        };
        let ghosts = ctx.ghosts();

        // Checked every tick, ahead of the ordinary replan cadence.
        let here = threat::danger_at(ghosts, ctx.actor.position);
        if here >= threat::FLEE_THRESHOLD {
            let (exit, exit_danger) = threat::safest_exit(graph, node, ghosts);
            tracing::debug!(danger = here, %exit, exit_danger, "flee override engaged");
            self.cache.clear();
            if exit != Direction::Stop {
                return exit;
            }
        }

        if ctx.active_pellets().next().is_none() {
            // Board cleared: keep our distance until the host ends the level.
            self.cache.clear();
            return threat::safest_exit(graph, node, ghosts).0;
        }

        let effective = node.key();
        if self.cache.needs_replan(ctx, effective) {
            if let Some((goal, target)) = select_goal(ctx) {
                let path = find_path(graph, node, target, ctx);
                tracing::debug!(%goal, steps = path.len(), "survival replan");
                self.cache.install(path, Some(goal), effective);
            }
        }

        if let Some(direction) = self.cache.next() {
            // The planned step may have turned dangerous since it was computed.
            if let Some(next) = graph.neighbor(node, direction) {
                if threat::danger_at(ghosts, next.position()) >= threat::FLEE_THRESHOLD {
                    self.cache.clear();
                    return threat::safest_exit(graph, node, ghosts).0;
                }
            }
            return direction;
        }

        threat::safest_exit(graph, node, ghosts).0
    }
}

/// Pellet minimizing threat at its position plus a lightly weighted distance
/// term, with the power-rush adjustment applied while the character is being
/// chased. First-best wins on ties, so iteration order decides them.
fn select_goal(ctx: &PilotContext<'_>) -> Option<(NodeKey, Vec2)> {
    let ghosts = ctx.ghosts();
    let chased = threat::hostile_within(ghosts, ctx.actor.position, POWER_RUSH_RADIUS_SQ);

    let mut best: Option<(f32, NodeKey, Vec2)> = None;
    for pellet in ctx.active_pellets() {
        let mut score = threat::danger_at(ghosts, pellet.position)
            + DISTANCE_WEIGHT * (pellet.position - ctx.actor.position).magnitude_squared();
        if chased && pellet.kind == PelletKind::Power {
            score += POWER_RUSH_BONUS;
        }
        if best.is_none_or(|(lowest, _, _)| score < lowest) {
            best = Some((score, pellet.node_key(), pellet.position));
        }
    }
    best.map(|(_, key, position)| (key, position))
}

/// Open-set entry ordered by `(f, insertion counter)`. The strictly
/// increasing counter makes ordering among equal f-scores deterministic.
#[derive(PartialEq)]
struct OpenEntry {
    f: f32,
    counter: u64,
    key: NodeKey,
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.counter.cmp(&other.counter))
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn heuristic(node: &Node, target: Vec2) -> f32 {
    let position = node.position();
    (position.x - target.x).abs() + (position.y - target.y).abs()
}

/// Best-first search where g accumulates the fixed movement cost plus the
/// threat at each entered neighbor. The Manhattan heuristic is admissible
/// only for the unweighted part; with threat folded into g the search trades
/// strict optimality for safety, which is intentional.
fn find_path(
    graph: &dyn GraphOracle,
    start: &Node,
    target: Vec2,
    ctx: &PilotContext<'_>,
) -> Vec<Direction> {
    let ghosts = ctx.ghosts();
    let start_key = start.key();

    if traversal::is_at_goal(start, target) {
        return Vec::new();
    }

    let mut counter: u64 = 0;
    let mut g_scores: HashMap<NodeKey, f32> = HashMap::from([(start_key, 0.0)]);
    let mut came_from = traversal::Predecessors::new();
    let mut visited: HashSet<NodeKey> = HashSet::new();
    let mut open = BinaryHeap::new();
    open.push(Reverse(OpenEntry {
        f: heuristic(start, target),
        counter,
        key: start_key,
    }));

    while let Some(Reverse(entry)) = open.pop() {
        let current_key = entry.key;
        if !visited.insert(current_key) {
            continue;
        }
        let Some(current) = graph.node(current_key) else {
            continue;
        };

        if traversal::is_at_goal(current, target) {
            return traversal::reconstruct_path(&came_from, start_key, current_key);
        }

        let current_g = g_scores.get(&current_key).copied().unwrap_or(f32::INFINITY);
        for (neighbor, direction) in traversal::neighbors(graph, current) {
            let neighbor_key = neighbor.key();
            if visited.contains(&neighbor_key) {
                continue;
            }

            let tentative = current_g
                + MazeConfig::TILE_WIDTH
                + threat::danger_at(ghosts, neighbor.position());
            if g_scores
                .get(&neighbor_key)
                .is_none_or(|&known| tentative < known)
            {
                g_scores.insert(neighbor_key, tentative);
                counter += 1;
                came_from.insert(neighbor_key, (current_key, direction));
                open.push(Reverse(OpenEntry {
                    f: tentative + heuristic(neighbor, target),
                    counter,
                    key: neighbor_key,
                }));
            }
        }
    }

    Vec::new()
}
