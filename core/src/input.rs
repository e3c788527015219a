use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
}

impl Command {
    /// Maps a DOM `KeyboardEvent.key` value to a command.
    pub fn from_key(key: &str) -> Option<Self> {
        use Direction::*;

        Some(match key {
            "ArrowUp" => Self::Turn(Up),
            "ArrowDown" => Self::Turn(Down),
            "ArrowLeft" => Self::Turn(Left),
            "ArrowRight" => Self::Turn(Right),
            // older browsers report "Spacebar"
            " " | "Spacebar" => Self::TogglePause,
            "Enter" => Self::Restart,
            _ => return None,
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Ignored,
    Turned,
    Paused,
    Resumed,
    Started,
}

impl CommandOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl PlayEngine {
    /// Applies a single key command, commands that make no sense in the current state are ignored.
    pub fn apply<G: FoodGenerator + ?Sized>(
        &mut self,
        command: Command,
        generator: &mut G,
    ) -> CommandOutcome {
        use CommandOutcome::*;

        match command {
            Command::Turn(direction) => match self.turn(direction) {
                Ok(TurnOutcome::Turned) => Turned,
                Ok(TurnOutcome::Ignored) | Err(_) => Ignored,
            },
            Command::TogglePause => {
                if !self.toggle_pause() {
                    Ignored
                } else if self.state().is_playing() {
                    Resumed
                } else {
                    Paused
                }
            }
            Command::Restart => match self.start(generator) {
                Ok(()) => Started,
                Err(err) => {
                    log::trace!("restart ignored: {}", err);
                    Ignored
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(
            Command::from_key("ArrowUp"),
            Some(Command::Turn(Direction::Up))
        );
        assert_eq!(
            Command::from_key("ArrowLeft"),
            Some(Command::Turn(Direction::Left))
        );
        assert_eq!(Command::from_key(" "), Some(Command::TogglePause));
        assert_eq!(Command::from_key("Enter"), Some(Command::Restart));
        assert_eq!(Command::from_key("a"), None);
        assert_eq!(Command::from_key("Escape"), None);
    }

    #[test]
    fn restart_only_when_not_playing() {
        let mut engine = PlayEngine::new(GameConfig::classic());
        let mut food = FixedFoodGenerator::new([(0, 0)]);

        assert_eq!(engine.apply(Command::Restart, &mut food), CommandOutcome::Started);
        assert_eq!(engine.apply(Command::Restart, &mut food), CommandOutcome::Ignored);

        assert_eq!(
            engine.apply(Command::TogglePause, &mut food),
            CommandOutcome::Paused
        );
        assert_eq!(engine.apply(Command::Restart, &mut food), CommandOutcome::Started);
    }

    #[test]
    fn pause_round_trip() {
        let mut engine = PlayEngine::new(GameConfig::classic());
        let mut food = FixedFoodGenerator::default();

        assert_eq!(
            engine.apply(Command::TogglePause, &mut food),
            CommandOutcome::Ignored
        );

        engine.apply(Command::Restart, &mut food);
        assert_eq!(
            engine.apply(Command::TogglePause, &mut food),
            CommandOutcome::Paused
        );
        assert_eq!(
            engine.apply(Command::TogglePause, &mut food),
            CommandOutcome::Resumed
        );
    }

    #[test]
    fn turn_commands_respect_the_reversal_guard() {
        let mut engine = PlayEngine::new(GameConfig::classic());
        let mut food = FixedFoodGenerator::default();

        assert_eq!(
            engine.apply(Command::Turn(Direction::Up), &mut food),
            CommandOutcome::Ignored
        );

        engine.apply(Command::Restart, &mut food);
        assert_eq!(
            engine.apply(Command::Turn(Direction::Left), &mut food),
            CommandOutcome::Ignored
        );
        assert_eq!(
            engine.apply(Command::Turn(Direction::Down), &mut food),
            CommandOutcome::Turned
        );
        assert_eq!(engine.direction(), Direction::Down);
    }
}
