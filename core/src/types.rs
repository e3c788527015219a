use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for snake lengths and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `y` grows downwards.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub const fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Up, Self::Down)
                | (Self::Down, Self::Up)
                | (Self::Left, Self::Right)
                | (Self::Right, Self::Left)
        )
    }

    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    /// Moves `coords` one cell in this direction, leaving one edge re-enters the opposite one.
    pub fn step(self, coords: Coord2, bounds: Coord2) -> Coord2 {
        let (dx, dy) = self.delta();
        (
            wrap_axis(coords.0, dx, bounds.0),
            wrap_axis(coords.1, dy, bounds.1),
        )
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Right
    }
}

fn wrap_axis(value: Coord, delta: i8, bound: Coord) -> Coord {
    let bound = i16::from(bound.max(1));
    // always in 0..bound, so it fits back into a Coord
    (i16::from(value) + i16::from(delta)).rem_euclid(bound) as Coord
}
