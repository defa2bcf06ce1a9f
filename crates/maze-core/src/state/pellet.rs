use super::{NodeKey, Vec2};

/// Pellet category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PelletKind {
    Regular,
    Power,
}

impl PelletKind {
    pub const fn points(self) -> u32 {
        match self {
            PelletKind::Regular => 10,
            PelletKind::Power => 50,
        }
    }
}

/// A collectible pellet. Owned by the host; entries are removed or
/// deactivated when consumed, which the pilot detects as a stale goal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pellet {
    pub position: Vec2,
    pub kind: PelletKind,
    pub points: u32,
    pub active: bool,
}

impl Pellet {
    pub fn new(position: Vec2, kind: PelletKind) -> Self {
        Self {
            position,
            kind,
            points: kind.points(),
            active: true,
        }
    }

    /// Key of the node this pellet sits on.
    pub fn node_key(&self) -> NodeKey {
        NodeKey::from_position(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_values_follow_kind() {
        assert_eq!(Pellet::new(Vec2::ZERO, PelletKind::Regular).points, 10);
        assert_eq!(Pellet::new(Vec2::ZERO, PelletKind::Power).points, 50);
    }
}
