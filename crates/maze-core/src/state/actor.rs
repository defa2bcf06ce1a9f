use super::{NodeKey, Vec2};

/// Behavioral state of a hostile entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GhostMode {
    /// Chase or scatter: dangerous, avoid.
    Hostile,
    /// Vulnerable after a power pellet: safe to approach.
    Frightened,
    /// Returning to spawn: inert, contributes no threat.
    Returning,
}

/// One hostile entity as observed by the pilot. Owned by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostState {
    pub position: Vec2,
    pub mode: GhostMode,
}

impl GhostState {
    pub const fn new(position: Vec2, mode: GhostMode) -> Self {
        Self { position, mode }
    }
}

/// The controlled character as observed by the pilot. Owned by the host.
///
/// `node` is the node last occupied; `target` is set while the character is
/// in transit along an edge.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub position: Vec2,
    pub node: Option<NodeKey>,
    pub target: Option<NodeKey>,
}

impl ActorState {
    pub const fn new(position: Vec2, node: Option<NodeKey>, target: Option<NodeKey>) -> Self {
        Self {
            position,
            node,
            target,
        }
    }

    /// The node searches should originate from: the in-transit target when
    /// one is set and differs from the current node, else the current node.
    pub fn effective_node(&self) -> Option<NodeKey> {
        match (self.node, self.target) {
            (node, Some(target)) if node != Some(target) => Some(target),
            (node, _) => node,
        }
    }
}
