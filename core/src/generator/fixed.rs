use super::*;
use alloc::collections::VecDeque;

/// Replays a scripted sequence of food cells, skipping entries that are out of bounds or taken.
///
/// Once the script runs out it falls back to the first free cell in row-major order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedFoodGenerator {
    script: VecDeque<Coord2>,
}

impl FixedFoodGenerator {
    pub fn new(script: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl FoodGenerator for FixedFoodGenerator {
    fn generate(&mut self, occupied: &Array2<bool>) -> Option<Coord2> {
        let (size_x, size_y) = occupied.dim();

        while let Some((x, y)) = self.script.pop_front() {
            let (ux, uy) = (usize::from(x), usize::from(y));
            if ux < size_x && uy < size_y && !occupied[[ux, uy]] {
                return Some((x, y));
            }
            log::debug!("skipping scripted food at ({}, {})", x, y);
        }

        (0..size_y)
            .flat_map(|y| (0..size_x).map(move |x| (x, y)))
            .find(|&(x, y)| !occupied[[x, y]])
            .map(|(x, y)| (x as Coord, y as Coord))
    }
}
