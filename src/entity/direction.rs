use glam::{IVec2, Vec2};
use strum_macros::{Display, EnumIter};

/// Facing of an entity on the tile grid. Entities start out facing down.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Neighbour order used when searching paths.
pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

impl Direction {
    /// One-tile offset in grid coordinates (y grows downward).
    pub fn as_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        self.as_ivec2().as_vec2()
    }

    /// Picks the facing for a displacement toward a target.
    ///
    /// The horizontal axis only wins when strictly larger (`|dx| > |dy|`), so exact ties face
    /// vertically. A zero displacement faces up.
    pub fn towards(delta: Vec2) -> Direction {
        if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if delta.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}
