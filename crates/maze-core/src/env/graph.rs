use crate::state::{Direction, NodeKey, Vec2};

bitflags::bitflags! {
    /// Entity classes permitted to traverse an edge.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EntityClassSet: u8 {
        const PACMAN = 1;
        const GHOST = 1 << 1;
    }
}

/// A single traversing entity class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityClass {
    Pacman,
    Ghost,
}

impl EntityClass {
    pub const fn flag(self) -> EntityClassSet {
        match self {
            EntityClass::Pacman => EntityClassSet::PACMAN,
            EntityClass::Ghost => EntityClassSet::GHOST,
        }
    }
}

impl EntityClassSet {
    pub fn allows(self, class: EntityClass) -> bool {
        self.contains(class.flag())
    }
}

/// Directed edge to a neighboring node, with its traversal permissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: NodeKey,
    pub access: EntityClassSet,
}

/// A graph vertex at a maze intersection, with up to four directional edges.
///
/// Nodes are owned by the host's graph; the pilot never mutates them. The
/// graph is static for the lifetime of a level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    position: Vec2,
    edges: [Option<Edge>; 4],
}

impl Node {
    pub const fn new(position: Vec2) -> Self {
        Self {
            position,
            edges: [None; 4],
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::from_position(self.position)
    }

    /// Edge in the given direction, if one exists. `Stop` never has an edge.
    pub fn edge(&self, direction: Direction) -> Option<&Edge> {
        direction
            .edge_slot()
            .and_then(|slot| self.edges[slot].as_ref())
    }

    /// Installs or replaces an edge. Setting an edge for `Stop` is ignored.
    pub fn set_edge(&mut self, direction: Direction, to: NodeKey, access: EntityClassSet) {
        if let Some(slot) = direction.edge_slot() {
            self.edges[slot] = Some(Edge { to, access });
        }
    }
}

/// Static graph oracle exposing the maze's node/edge structure.
pub trait GraphOracle: Send + Sync {
    fn node(&self, key: NodeKey) -> Option<&Node>;

    /// Resolves the neighbor reached by leaving `node` in `direction`.
    /// A dangling edge (key with no node behind it) resolves to `None`.
    fn neighbor(&self, node: &Node, direction: Direction) -> Option<&Node> {
        node.edge(direction).and_then(|edge| self.node(edge.to))
    }

    /// Whether `class` may traverse the edge leaving `node` in `direction`.
    /// Missing edges are simply not permitted.
    fn permitted(&self, node: &Node, direction: Direction, class: EntityClass) -> bool {
        node.edge(direction)
            .is_some_and(|edge| edge.access.allows(class))
    }
}
