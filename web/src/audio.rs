use crate::utils::*;
use slither_core::{AudioSettings, Cue, CuePreset};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

impl StorageKey for AudioSettings {
    const KEY: &'static str = "slither:audio";
}

/// One loaded clip per cue of the active preset.
///
/// Playback is fire and forget: failures are logged and never reach the game.
pub(crate) struct AudioDeck {
    clips: [Option<HtmlAudioElement>; 4],
    muted: bool,
}

impl AudioDeck {
    pub(crate) fn new(settings: &AudioSettings) -> Self {
        let preset = settings.preset();
        log::debug!("loading cue preset {:?}", preset.name);
        Self {
            clips: Cue::ALL.map(|cue| Self::load_clip(preset, cue, settings.muted)),
            muted: settings.muted,
        }
    }

    fn load_clip(preset: &CuePreset, cue: Cue, muted: bool) -> Option<HtmlAudioElement> {
        match HtmlAudioElement::new_with_src(preset.url(cue)) {
            Ok(clip) => {
                clip.set_volume(cue.volume());
                clip.set_muted(muted);
                Some(clip)
            }
            Err(err) => {
                log::warn!("could not create {:?} clip: {:?}", cue, err);
                None
            }
        }
    }

    pub(crate) fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        for clip in self.clips.iter().flatten() {
            clip.set_muted(muted);
        }
    }

    pub(crate) fn play(&self, cue: Cue) {
        if self.muted {
            return;
        }
        let Some(clip) = &self.clips[cue.index()] else {
            return;
        };

        clip.set_current_time(0.0);
        match clip.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("{:?} cue failed to play: {:?}", cue, err);
                }
            }),
            Err(err) => log::warn!("{:?} cue failed to start: {:?}", cue, err),
        }
    }

    pub(crate) fn stop_all(&self) {
        for clip in self.clips.iter().flatten() {
            if let Err(err) = clip.pause() {
                log::warn!("could not pause clip: {:?}", err);
            }
            clip.set_current_time(0.0);
        }
    }
}
