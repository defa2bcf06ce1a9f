//! Per-tick world view handed to a direction query.

use maze_core::{ActorState, GhostState, GraphOracle, MazeEnv, Node, NodeKey, Pellet};

/// Read-only bundle of everything a strategy may consult during one query.
///
/// The host builds a fresh context every tick from its own world state; the
/// pilot never retains references past the query. Missing oracles are not
/// errors here — accessors degrade to empty views and the strategy answers
/// `Stop`.
pub struct PilotContext<'a> {
    /// The controlled character.
    pub actor: &'a ActorState,

    /// Read-only access to the world oracles.
    pub env: MazeEnv<'a>,
}

impl<'a> PilotContext<'a> {
    pub fn new(actor: &'a ActorState, env: MazeEnv<'a>) -> Self {
        Self { actor, env }
    }

    pub fn graph(&self) -> Option<&'a dyn GraphOracle> {
        self.env.graph().ok()
    }

    /// Resolves the character's effective node against the graph. `None`
    /// when the character is uninitialized or its node is unknown to the
    /// graph; a query with no effective node answers `Stop`.
    pub fn effective_node(&self) -> Option<&'a Node> {
        let key = self.actor.effective_node()?;
        self.graph()?.node(key)
    }

    /// Pellets still on the board.
    pub fn active_pellets(&self) -> impl Iterator<Item = &'a Pellet> + 'a {
        self.env
            .pellets()
            .map(|oracle| oracle.pellets())
            .unwrap_or(&[])
            .iter()
            .filter(|pellet| pellet.active)
    }

    /// Whether an active pellet still sits on the node `key`. Used by the
    /// replan policy to detect a consumed goal.
    pub fn pellet_active_at(&self, key: NodeKey) -> bool {
        self.active_pellets().any(|pellet| pellet.node_key() == key)
    }

    pub fn ghosts(&self) -> &'a [GhostState] {
        self.env
            .ghosts()
            .map(|oracle| oracle.ghosts())
            .unwrap_or(&[])
    }
}
