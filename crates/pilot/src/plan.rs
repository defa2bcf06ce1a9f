//! Cached plan state and the shared replan policy.

use std::collections::VecDeque;

use maze_core::{Direction, NodeKey};

use crate::context::PilotContext;

/// The pilot's only mutable state: the pending path, the pellet goal it was
/// planned against, and the node last observed under the character.
///
/// Every direction in `path` was a valid, permitted edge at planning time;
/// the graph is static per level so steps are not re-validated against it.
/// Ordinary queries *peek* at the front of the path — a step is consumed
/// only when the character is observed on a new node, so repeated queries
/// between ticks neither shrink nor alter the plan.
#[derive(Clone, Debug, Default)]
pub struct PlanCache {
    path: VecDeque<Direction>,
    goal: Option<NodeKey>,
    last_node: Option<NodeKey>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the plan with a freshly computed path toward `goal`,
    /// anchored at the node the search started from.
    pub fn install(&mut self, path: Vec<Direction>, goal: Option<NodeKey>, origin: NodeKey) {
        self.path = path.into();
        self.goal = goal;
        self.last_node = Some(origin);
    }

    pub fn clear(&mut self) {
        self.path.clear();
        self.goal = None;
        self.last_node = None;
    }

    /// Evaluates the replan policy for this tick, consuming a step if the
    /// character advanced to a new node since the last query.
    ///
    /// Replans when: the path is empty; the goal pellet vanished; or the
    /// step just consumed exhausted the path.
    pub fn needs_replan(&mut self, ctx: &PilotContext<'_>, effective: NodeKey) -> bool {
        if self.path.is_empty() {
            return true;
        }

        if let Some(goal) = self.goal {
            if !ctx.pellet_active_at(goal) {
                tracing::debug!(%goal, "goal pellet vanished, replanning");
                return true;
            }
        }

        if self.last_node != Some(effective) {
            self.last_node = Some(effective);
            self.path.pop_front();
            if self.path.is_empty() {
                return true;
            }
        }

        false
    }

    /// Next pending step without consuming it.
    pub fn next(&self) -> Option<Direction> {
        self.path.front().copied()
    }

    pub fn goal(&self) -> Option<NodeKey> {
        self.goal
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use maze_core::{Env, GhostSnapshot, Pellet, PelletKind, PelletSnapshot, Vec2};

    use super::*;
    use crate::testutil;

    fn pellet_at(col: i32, row: i32) -> Pellet {
        Pellet::new(testutil::at(col, row), PelletKind::Regular)
    }

    #[test]
    fn empty_cache_always_replans() {
        let graph = testutil::grid(2, 1);
        let pellets = PelletSnapshot::new();
        let ghosts = GhostSnapshot::new();
        let actor = testutil::actor_on(testutil::key(0, 0));
        let env = Env::with_all(&graph, &pellets, &ghosts);
        let ctx = crate::PilotContext::new(&actor, env.into_maze_env());

        let mut cache = PlanCache::new();
        assert!(cache.needs_replan(&ctx, testutil::key(0, 0)));
    }

    #[test]
    fn repeated_queries_on_the_same_node_do_not_consume() {
        let graph = testutil::grid(3, 1);
        let mut pellets = PelletSnapshot::new();
        pellets.push(pellet_at(2, 0));
        let ghosts = GhostSnapshot::new();
        let actor = testutil::actor_on(testutil::key(0, 0));
        let env = Env::with_all(&graph, &pellets, &ghosts);
        let ctx = crate::PilotContext::new(&actor, env.into_maze_env());

        let mut cache = PlanCache::new();
        cache.install(
            vec![Direction::Right, Direction::Right],
            Some(testutil::key(2, 0)),
            testutil::key(0, 0),
        );

        for _ in 0..3 {
            assert!(!cache.needs_replan(&ctx, testutil::key(0, 0)));
            assert_eq!(cache.next(), Some(Direction::Right));
            assert_eq!(cache.len(), 2);
        }
    }

    #[test]
    fn node_transition_consumes_one_step() {
        let graph = testutil::grid(3, 1);
        let mut pellets = PelletSnapshot::new();
        pellets.push(pellet_at(2, 0));
        let ghosts = GhostSnapshot::new();
        let actor = testutil::actor_on(testutil::key(1, 0));
        let env = Env::with_all(&graph, &pellets, &ghosts);
        let ctx = crate::PilotContext::new(&actor, env.into_maze_env());

        let mut cache = PlanCache::new();
        cache.install(
            vec![Direction::Right, Direction::Right],
            Some(testutil::key(2, 0)),
            testutil::key(0, 0),
        );

        assert!(!cache.needs_replan(&ctx, testutil::key(1, 0)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.next(), Some(Direction::Right));

        // Final step consumed on the next transition: time to replan.
        assert!(cache.needs_replan(&ctx, testutil::key(2, 0)));
    }

    #[test]
    fn vanished_goal_forces_replan() {
        let graph = testutil::grid(3, 1);
        let pellets = PelletSnapshot::new();
        let ghosts = GhostSnapshot::new();
        let actor = testutil::actor_on(testutil::key(0, 0));
        let env = Env::with_all(&graph, &pellets, &ghosts);
        let ctx = crate::PilotContext::new(&actor, env.into_maze_env());

        let mut cache = PlanCache::new();
        cache.install(
            vec![Direction::Right],
            Some(testutil::key(2, 0)),
            testutil::key(0, 0),
        );

        assert!(cache.needs_replan(&ctx, testutil::key(0, 0)));
    }
}
