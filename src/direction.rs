use crate::models::{HasPoint, Vector};

/// One of the four cardinal moves. Each variant carries its unit offset
/// and the token the snake API expects in the `move` field.
///
/// The board's origin is the top-left corner: `Up` decreases y, `Down`
/// increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Left,
        Direction::Right,
    ];

    pub fn vector(self) -> Vector {
        match self {
            Direction::Left => Vector::new(-1, 0),
            Direction::Right => Vector::new(1, 0),
            Direction::Up => Vector::new(0, -1),
            Direction::Down => Vector::new(0, 1),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Reverse lookup from a unit offset. Anything that is not one of the
    /// four unit vectors maps to `Left`; that default is part of the
    /// contract, not an error.
    pub fn from_vector(v: Vector) -> Direction {
        Direction::ALL
            .iter()
            .copied()
            .find(|dir| dir.vector() == v)
            .unwrap_or(Direction::Left)
    }

    /// True iff stepping this way moves `from` strictly closer to
    /// `target` along this direction's axis.
    pub fn approaches(self, from: Vector, target: Vector) -> bool {
        let d = target - from;
        match self {
            Direction::Left => d.x.signum() == -1,
            Direction::Right => d.x.signum() == 1,
            Direction::Up => d.y.signum() == -1,
            Direction::Down => d.y.signum() == 1,
        }
    }
}
