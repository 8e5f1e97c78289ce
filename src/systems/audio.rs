//! Dispatches queued audio events to the host's audio backend.
//!
//! The backend lives in a NonSend resource, since SDL2_mixer handles must stay on the main thread.
//! Failures reported by the backend never leave this module.

use bevy_ecs::{
    event::{Event, EventReader},
    resource::Resource,
    system::{NonSendMut, Res},
};
use tracing::{debug, trace};

use crate::{
    audio::{AudioBackend, Music, Sound},
    constants,
};

/// Music and sound switches plus the global volume, preserved across sessions.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct AudioSettings {
    pub music_enabled: bool,
    pub sounds_enabled: bool,
    /// Multiplier applied to both music and effects.
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sounds_enabled: true,
            volume: constants::audio::GLOBAL_VOLUME,
        }
    }
}

impl AudioSettings {
    pub fn muted() -> Self {
        Self {
            music_enabled: false,
            sounds_enabled: false,
            ..Self::default()
        }
    }

    /// Flips music and makes effects follow it. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.sounds_enabled = self.music_enabled;
        self.music_enabled
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    PlaySound(Sound),
    PlayMusic(Music),
    StopMusic,
}

/// Non-send wrapper around the host's audio backend.
pub struct AudioResource(pub Box<dyn AudioBackend>);

/// Plays queued events, gated by the settings at dispatch time.
pub fn audio_system(mut audio: NonSendMut<AudioResource>, settings: Res<AudioSettings>, mut events: EventReader<AudioEvent>) {
    for event in events.read() {
        let result = match *event {
            AudioEvent::PlaySound(sound) => {
                if !settings.sounds_enabled {
                    trace!(?sound, "Sounds disabled, skipping");
                    continue;
                }
                audio.0.play_sound(sound, settings.volume)
            }
            AudioEvent::PlayMusic(music) => {
                if !settings.music_enabled {
                    trace!(?music, "Music disabled, skipping");
                    continue;
                }
                audio.0.play_music(music, settings.volume)
            }
            AudioEvent::StopMusic => audio.0.stop_music(),
        };

        if let Err(e) = result {
            debug!(?event, error = %e, "Audio playback skipped");
        }
    }
}
