/// Spatial tuning constants shared by the world model and the decision engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig;

impl MazeConfig {
    /// Width of one maze tile in world units. All proximity thresholds are
    /// expressed as multiples of this.
    pub const TILE_WIDTH: f32 = 16.0;

    /// Arrival tolerance in tile-widths. A node "is" a goal when its squared
    /// distance to the target position is below [`Self::GOAL_RADIUS_SQ`],
    /// which keeps goal tests stable while the character is mid-edge.
    pub const GOAL_RADIUS_TILES: f32 = 1.5;

    /// Squared arrival radius, compared directly against squared distances so
    /// no square root is ever taken.
    pub const GOAL_RADIUS_SQ: f32 = Self::tile_radius_sq(Self::GOAL_RADIUS_TILES);

    /// Squared world-unit radius for a radius given in tile-widths.
    pub const fn tile_radius_sq(tiles: f32) -> f32 {
        (tiles * Self::TILE_WIDTH) * (tiles * Self::TILE_WIDTH)
    }
}
