use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Playing,
    Paused,
    Over,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }

    /// A new game may start from anywhere except a running one.
    pub const fn can_start(self) -> bool {
        !self.is_playing()
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    config: GameConfig,
    /// Head first, never empty.
    snake: VecDeque<Coord2>,
    occupied: Array2<bool>,
    /// Direction of the last committed move.
    heading: Direction,
    /// Direction the next tick moves in.
    direction: Direction,
    food: Option<Coord2>,
    score: u32,
    state: EngineState,
}

impl PlayEngine {
    pub fn new(config: GameConfig) -> Self {
        let mut occupied: Array2<bool> = Array2::default(config.size.to_nd_index());
        occupied[config.origin.to_nd_index()] = true;
        Self {
            config,
            snake: VecDeque::from([config.origin]),
            occupied,
            heading: config.initial_direction,
            direction: config.initial_direction,
            food: None,
            score: 0,
            state: Default::default(),
        }
    }

    /// Builds a running game from explicit parts, mostly useful to replay a known position.
    pub fn from_parts(
        config: GameConfig,
        snake: &[Coord2],
        direction: Direction,
        food: Option<Coord2>,
    ) -> Result<Self> {
        if snake.is_empty() {
            return Err(GameError::EmptySnake);
        }

        let mut occupied: Array2<bool> = Array2::default(config.size.to_nd_index());
        for &coords in snake {
            let coords = config.validate_coords(coords)?;
            let cell = &mut occupied[coords.to_nd_index()];
            if *cell {
                return Err(GameError::SelfOverlap);
            }
            *cell = true;
        }

        if let Some(food) = food {
            if occupied[config.validate_coords(food)?.to_nd_index()] {
                return Err(GameError::FoodOnSnake);
            }
        }

        Ok(Self {
            config,
            snake: snake.iter().copied().collect(),
            occupied,
            heading: direction,
            direction,
            food,
            score: 0,
            state: EngineState::Playing,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food(&self) -> Option<Coord2> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn head(&self) -> Coord2 {
        self.snake[0]
    }

    pub fn snake(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.snake.iter().copied()
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_occupied(&self, coords: Coord2) -> bool {
        self.config.contains(coords) && self.occupied[coords.to_nd_index()]
    }

    /// Resets everything and starts playing, valid from any state except an already running game.
    pub fn start<G: FoodGenerator + ?Sized>(&mut self, generator: &mut G) -> Result<()> {
        if !self.state.can_start() {
            return Err(GameError::AlreadyPlaying);
        }

        let origin = self.config.origin;
        self.occupied.fill(false);
        self.occupied[origin.to_nd_index()] = true;
        self.snake.clear();
        self.snake.push_back(origin);
        self.heading = self.config.initial_direction;
        self.direction = self.config.initial_direction;
        self.score = 0;
        self.state = EngineState::Playing;
        self.food = self.spawn_food(generator);

        log::debug!("game started at {:?}, food at {:?}", origin, self.food);
        Ok(())
    }

    /// Switches between playing and paused, returns whether anything changed.
    pub fn toggle_pause(&mut self) -> bool {
        use EngineState::*;

        self.state = match self.state {
            Playing => Paused,
            Paused => Playing,
            Ready | Over => return false,
        };
        log::debug!("pause toggled: {:?}", self.state);
        true
    }

    /// Requests a new direction for the next tick, the last accepted request before a tick wins.
    ///
    /// A request that reverses the last committed move, or the pending one, is ignored.
    pub fn turn(&mut self, direction: Direction) -> Result<TurnOutcome> {
        self.check_steerable()?;

        if direction == self.direction
            || direction.is_opposite(self.heading)
            || direction.is_opposite(self.direction)
        {
            return Ok(TurnOutcome::Ignored);
        }

        self.direction = direction;
        Ok(TurnOutcome::Turned)
    }

    pub fn tick<G: FoodGenerator + ?Sized>(&mut self, generator: &mut G) -> TickOutcome {
        if !self.state.is_playing() {
            return TickOutcome::Idle;
        }

        let next = self.direction.step(self.head(), self.config.size);

        // the tail still counts, it has not moved out of the way yet
        if self.occupied[next.to_nd_index()] {
            self.state = EngineState::Over;
            log::debug!("crashed into {:?}, final score {}", next, self.score);
            return TickOutcome::Crashed;
        }

        self.heading = self.direction;
        self.snake.push_front(next);
        self.occupied[next.to_nd_index()] = true;

        if self.food == Some(next) {
            self.score = self.score.saturating_add(self.config.points_per_food);
            self.food = self.spawn_food(generator);
            log::trace!("ate at {:?}, score {}", next, self.score);
            TickOutcome::Ate
        } else {
            if let Some(tail) = self.snake.pop_back() {
                self.occupied[tail.to_nd_index()] = false;
            }
            TickOutcome::Moved
        }
    }

    fn spawn_food<G: FoodGenerator + ?Sized>(&self, generator: &mut G) -> Option<Coord2> {
        let food = generator.generate(&self.occupied);
        if food.is_none() {
            log::warn!("Snake fills the whole grid, no food placed");
        }
        food
    }

    fn check_steerable(&self) -> Result<()> {
        if matches!(self.state, EngineState::Playing | EngineState::Paused) {
            Ok(())
        } else {
            Err(GameError::NotPlaying)
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn eating_then_crashing_on_wasm() {
        let mut engine = PlayEngine::from_parts(
            GameConfig::classic(),
            &[(10, 10)],
            Direction::Right,
            Some((11, 10)),
        )
        .unwrap();
        let mut food = FixedFoodGenerator::new([(12, 10)]);

        assert_eq!(engine.tick(&mut food), TickOutcome::Ate);
        assert_eq!(engine.score(), 10);
        assert_eq!(engine.food(), Some((12, 10)));

        assert_eq!(engine.turn(Direction::Left), Ok(TurnOutcome::Ignored));
        assert_eq!(engine.turn(Direction::Up), Ok(TurnOutcome::Turned));
        assert_eq!(engine.tick(&mut food), TickOutcome::Moved);
        assert_eq!(engine.head(), (11, 9));
    }

    #[wasm_bindgen_test]
    fn random_food_avoids_the_snake_on_wasm() {
        let mut engine = PlayEngine::new(GameConfig::classic());
        let mut food = RandomFoodGenerator::new(7);
        engine.start(&mut food).unwrap();

        let cell = engine.food().unwrap();
        assert!(!engine.is_occupied(cell));
    }
}
