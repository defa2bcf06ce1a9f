use std::fmt;
use std::ops::{Add, Sub};

/// Continuous world-space position or displacement.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared magnitude. Proximity checks compare squared values directly,
    /// never the true Euclidean distance.
    pub fn magnitude_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Hashable node identity: truncated integer tile coordinates.
///
/// Floating-point positions are never compared for equality; every lookup
/// into the graph or a predecessor map goes through a `NodeKey`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeKey {
    pub x: i32,
    pub y: i32,
}

impl NodeKey {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncates a continuous position into its node key.
    pub fn from_position(position: Vec2) -> Self {
        Self {
            x: position.x as i32,
            y: position.y as i32,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Movement direction, including the neutral [`Direction::Stop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
    Stop,
}

impl Direction {
    /// Canonical neighbor expansion order. Searches iterate edges in this
    /// order so equal-cost ties always break the same way.
    pub const TRAVERSAL_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Stop => Direction::Stop,
        }
    }

    /// Edge slot for this direction; [`Direction::Stop`] has no edge.
    pub(crate) const fn edge_slot(self) -> Option<usize> {
        match self {
            Direction::Up => Some(0),
            Direction::Left => Some(1),
            Direction::Down => Some(2),
            Direction::Right => Some(3),
            Direction::Stop => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_key_truncates_toward_zero() {
        assert_eq!(
            NodeKey::from_position(Vec2::new(16.9, 31.2)),
            NodeKey::new(16, 31)
        );
        assert_eq!(
            NodeKey::from_position(Vec2::new(-0.5, 0.0)),
            NodeKey::new(0, 0)
        );
    }

    #[test]
    fn traversal_order_is_up_left_down_right() {
        assert_eq!(
            Direction::TRAVERSAL_ORDER,
            [Direction::Up, Direction::Left, Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn opposites_pair_up() {
        for direction in Direction::TRAVERSAL_ORDER {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
        assert_eq!(Direction::Stop.opposite(), Direction::Stop);
    }
}
