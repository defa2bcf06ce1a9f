//! In-memory oracle implementations.
//!
//! Hosts that keep their world data in plain collections can use these
//! directly; the pilot's tests build fixture mazes with them as well.

use std::collections::BTreeMap;

use super::{EntityClassSet, GhostOracle, GraphOracle, Node, PelletOracle};
use crate::state::{Direction, GhostState, NodeKey, Pellet, Vec2};

/// Owned node/edge storage implementing [`GraphOracle`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSnapshot {
    nodes: BTreeMap<NodeKey, Node>,
}

impl GraphSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node at `position` and returns its key. Re-inserting at an
    /// occupied key replaces the node and drops its edges.
    pub fn insert(&mut self, position: Vec2) -> NodeKey {
        let key = NodeKey::from_position(position);
        self.nodes.insert(key, Node::new(position));
        key
    }

    /// Installs a one-way edge. Unknown endpoints are ignored; the resulting
    /// dangling direction is excluded from neighbor iteration.
    pub fn connect(&mut self, from: NodeKey, direction: Direction, to: NodeKey, access: EntityClassSet) {
        if let Some(node) = self.nodes.get_mut(&from) {
            node.set_edge(direction, to, access);
        }
    }

    /// Installs the edge and its reverse in one call.
    pub fn connect_both(
        &mut self,
        from: NodeKey,
        direction: Direction,
        to: NodeKey,
        access: EntityClassSet,
    ) {
        self.connect(from, direction, to, access);
        self.connect(to, direction.opposite(), from, access);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl GraphOracle for GraphSnapshot {
    fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(&key)
    }
}

/// Owned pellet storage implementing [`PelletOracle`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PelletSnapshot {
    pellets: Vec<Pellet>,
}

impl PelletSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pellet: Pellet) {
        self.pellets.push(pellet);
    }

    /// Removes every pellet sitting on `key`, as a host does on consumption.
    /// Returns true if anything was removed.
    pub fn remove_at(&mut self, key: NodeKey) -> bool {
        let before = self.pellets.len();
        self.pellets.retain(|pellet| pellet.node_key() != key);
        self.pellets.len() != before
    }

    pub fn clear(&mut self) {
        self.pellets.clear();
    }
}

impl PelletOracle for PelletSnapshot {
    fn pellets(&self) -> &[Pellet] {
        &self.pellets
    }
}

/// Owned ghost storage implementing [`GhostOracle`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostSnapshot {
    ghosts: Vec<GhostState>,
}

impl GhostSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ghost: GhostState) {
        self.ghosts.push(ghost);
    }

    pub fn ghosts_mut(&mut self) -> &mut [GhostState] {
        &mut self.ghosts
    }
}

impl GhostOracle for GhostSnapshot {
    fn ghosts(&self) -> &[GhostState] {
        &self.ghosts
    }
}
