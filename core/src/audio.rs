use serde::{Deserialize, Serialize};

use crate::*;

/// Delay between the crash cue and the celebration that follows it.
pub const CELEBRATION_DELAY_MILLIS: u32 = 800;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Eat,
    Crash,
    /// Played when the final score beats the best one on the leaderboard.
    Applause,
    /// Played for every other finished game.
    Cheer,
}

impl Cue {
    pub const ALL: [Cue; 4] = [Self::Eat, Self::Crash, Self::Applause, Self::Cheer];

    pub const fn index(self) -> usize {
        use Cue::*;
        match self {
            Eat => 0,
            Crash => 1,
            Applause => 2,
            Cheer => 3,
        }
    }

    pub const fn volume(self) -> f64 {
        match self {
            Self::Crash => 0.4,
            Self::Eat | Self::Applause | Self::Cheer => 0.5,
        }
    }

    /// Immediate cue for a tick, the celebration is scheduled separately.
    pub const fn for_tick(outcome: TickOutcome) -> Option<Self> {
        match outcome {
            TickOutcome::Ate => Some(Self::Eat),
            TickOutcome::Crashed => Some(Self::Crash),
            TickOutcome::Idle | TickOutcome::Moved => None,
        }
    }

    pub fn celebration(final_score: u32, best_score: Option<u32>) -> Self {
        if final_score > best_score.unwrap_or(0) {
            Self::Applause
        } else {
            Self::Cheer
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CuePreset {
    pub name: &'static str,
    urls: [&'static str; 4],
}

impl CuePreset {
    pub const fn url(&self, cue: Cue) -> &'static str {
        self.urls[cue.index()]
    }
}

pub const PRESETS: &[CuePreset] = &[
    CuePreset {
        name: "Relaxing",
        urls: [
            "https://freesound.org/data/previews/240/240776_4284968-lq.mp3",
            "https://freesound.org/data/previews/240/240777_4284968-lq.mp3",
            "https://freesound.org/data/previews/240/240778_4284968-lq.mp3",
            "https://freesound.org/data/previews/240/240779_4284968-lq.mp3",
        ],
    },
    CuePreset {
        name: "Soothing",
        urls: [
            "https://freesound.org/data/previews/242/242857_4284968-lq.mp3",
            "https://freesound.org/data/previews/242/242858_4284968-lq.mp3",
            "https://freesound.org/data/previews/242/242859_4284968-lq.mp3",
            "https://freesound.org/data/previews/242/242860_4284968-lq.mp3",
        ],
    },
    CuePreset {
        name: "ASMR",
        urls: [
            "https://assets.mixkit.co/active_storage/sfx/2581/2581-preview.mp3",
            "https://assets.mixkit.co/active_storage/sfx/2580/2580-preview.mp3",
            "https://assets.mixkit.co/active_storage/sfx/2582/2582-preview.mp3",
            "https://assets.mixkit.co/active_storage/sfx/2583/2583-preview.mp3",
        ],
    },
];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub muted: bool,
    pub preset: usize,
}

impl AudioSettings {
    /// Stored indices may be stale, they wrap into the preset list.
    pub fn preset(&self) -> &'static CuePreset {
        &PRESETS[self.preset % PRESETS.len()]
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn next_preset(&mut self) -> &'static CuePreset {
        self.preset = (self.preset % PRESETS.len() + 1) % PRESETS.len();
        self.preset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_outcomes_map_to_cues() {
        assert_eq!(Cue::for_tick(TickOutcome::Ate), Some(Cue::Eat));
        assert_eq!(Cue::for_tick(TickOutcome::Crashed), Some(Cue::Crash));
        assert_eq!(Cue::for_tick(TickOutcome::Moved), None);
        assert_eq!(Cue::for_tick(TickOutcome::Idle), None);
    }

    #[test]
    fn celebration_needs_a_new_best() {
        assert_eq!(Cue::celebration(100, Some(90)), Cue::Applause);
        assert_eq!(Cue::celebration(90, Some(90)), Cue::Cheer);
        assert_eq!(Cue::celebration(10, None), Cue::Applause);
        assert_eq!(Cue::celebration(0, None), Cue::Cheer);
    }

    #[test]
    fn presets_cycle() {
        let mut settings = AudioSettings::default();
        assert_eq!(settings.preset().name, "Relaxing");

        assert_eq!(settings.next_preset().name, "Soothing");
        assert_eq!(settings.next_preset().name, "ASMR");
        assert_eq!(settings.next_preset().name, "Relaxing");
        assert_eq!(settings.preset, 0);
    }

    #[test]
    fn stale_preset_index_wraps() {
        let mut settings = AudioSettings {
            muted: false,
            preset: 7,
        };

        assert_eq!(settings.preset().name, PRESETS[1].name);
        assert_eq!(settings.next_preset().name, PRESETS[2].name);
    }

    #[test]
    fn every_preset_has_a_url_per_cue() {
        for preset in PRESETS {
            for cue in Cue::ALL {
                assert!(preset.url(cue).starts_with("https://"));
            }
        }
    }

    #[test]
    fn mute_toggles() {
        let mut settings = AudioSettings::default();

        assert!(settings.toggle_mute());
        assert!(!settings.toggle_mute());
    }
}
