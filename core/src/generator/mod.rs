use crate::*;
use ndarray::Array2;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Picks the cell the next food lands on.
///
/// `occupied` is the snake's occupancy mask, indexed `[x, y]`; implementations must never return an occupied
/// cell, and return `None` only when no free cell is left.
pub trait FoodGenerator {
    fn generate(&mut self, occupied: &Array2<bool>) -> Option<Coord2>;
}

fn has_free_cell(occupied: &Array2<bool>) -> bool {
    occupied.iter().any(|&taken| !taken)
}
