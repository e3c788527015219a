use super::*;
use rand::rngs::SmallRng;

/// Uniform placement by rejection sampling: draw any cell of the grid and retry while it is taken.
///
/// There is no bound on the number of retries, the snake only covers a small part of the grid in practice. A full
/// grid is detected up-front so the loop always terminates.
#[derive(Clone, Debug)]
pub struct RandomFoodGenerator {
    rng: SmallRng,
}

impl RandomFoodGenerator {
    pub fn new(seed: u64) -> Self {
        use rand::prelude::*;

        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl FoodGenerator for RandomFoodGenerator {
    fn generate(&mut self, occupied: &Array2<bool>) -> Option<Coord2> {
        use rand::prelude::*;

        if !has_free_cell(occupied) {
            log::warn!("No free cell left for food on a {:?} grid", occupied.dim());
            return None;
        }

        let (size_x, size_y) = occupied.dim();
        let mut attempts: u32 = 0;
        loop {
            let x = self.rng.random_range(0..size_x);
            let y = self.rng.random_range(0..size_y);
            attempts += 1;
            if !occupied[[x, y]] {
                log::trace!("food at ({}, {}) after {} draws", x, y, attempts);
                return Some((x as Coord, y as Coord));
            }
        }
    }
}
