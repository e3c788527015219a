#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use audio::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use ledger::*;
pub use types::*;

mod audio;
mod engine;
mod error;
mod generator;
mod input;
mod ledger;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub origin: Coord2,
    pub initial_direction: Direction,
    pub points_per_food: u32,
    pub tick_millis: u32,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, origin: Coord2) -> Self {
        Self {
            size,
            origin,
            initial_direction: Direction::Right,
            points_per_food: 10,
            tick_millis: 150,
        }
    }

    pub fn new((size_x, size_y): Coord2, (origin_x, origin_y): Coord2) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let origin = (origin_x.min(size_x - 1), origin_y.min(size_y - 1));
        Self::new_unchecked((size_x, size_y), origin)
    }

    /// The 20x20 board starting in the middle, heading right.
    pub const fn classic() -> Self {
        Self::new_unchecked((20, 20), (10, 10))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size.0 && coords.1 < self.size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Ignored,
    Turned,
}

impl TurnOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Turned)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Moved,
    Ate,
    Crashed,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            Idle => false,
            Moved => true,
            Ate => true,
            Crashed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_config_matches_default() {
        let config = GameConfig::default();

        assert_eq!(config.size, (20, 20));
        assert_eq!(config.origin, (10, 10));
        assert_eq!(config.initial_direction, Direction::Right);
        assert_eq!(config.points_per_food, 10);
        assert_eq!(config.tick_millis, 150);
        assert_eq!(config.total_cells(), 400);
    }

    #[test]
    fn new_clamps_size_and_origin() {
        let config = GameConfig::new((0, 5), (3, 9));

        assert_eq!(config.size, (1, 5));
        assert_eq!(config.origin, (0, 4));
    }

    #[test]
    fn validate_coords_rejects_out_of_bounds() {
        let config = GameConfig::classic();

        assert_eq!(config.validate_coords((19, 19)), Ok((19, 19)));
        assert_eq!(config.validate_coords((20, 0)), Err(GameError::InvalidCoords));
    }
}
