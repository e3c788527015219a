use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Snake must have at least one segment")]
    EmptySnake,
    #[error("Snake segments overlap")]
    SelfOverlap,
    #[error("Food cannot be placed on the snake")]
    FoodOnSnake,
    #[error("Game already in progress")]
    AlreadyPlaying,
    #[error("Game is not running, no moves are accepted")]
    NotPlaying,
}

pub type Result<T> = core::result::Result<T, GameError>;
