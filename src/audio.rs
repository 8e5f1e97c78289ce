//! This module handles the audio playback for the game.
//!
//! Playback goes through the [`AudioBackend`] capability so the simulation never depends on an audio
//! device being present. Every failure is reported as an [`AudioError`] and swallowed by the caller.

use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};

use crate::error::AudioError;

/// Sound effect identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Sound {
    Step,
    Coin,
    Hit,
    GameOver,
    ButtonClick,
}

/// Background music tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Music {
    Background,
}

/// Sound effect and music playback, as provided by the host.
pub trait AudioBackend {
    /// Plays an effect once at `volume` (0.0 to 1.0).
    fn play_sound(&mut self, sound: Sound, volume: f32) -> Result<(), AudioError>;

    /// Starts looping a music track at `volume`, replacing whatever is playing.
    fn play_music(&mut self, music: Music, volume: f32) -> Result<(), AudioError>;

    fn stop_music(&mut self) -> Result<(), AudioError>;
}

/// A backend with no device; every call reports [`AudioError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn play_sound(&mut self, _sound: Sound, _volume: f32) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }

    fn play_music(&mut self, _music: Music, _volume: f32) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }
}

#[cfg(feature = "sdl")]
pub use self::mixer::MixerAudio;

#[cfg(feature = "sdl")]
mod mixer {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    use anyhow::{anyhow, Result};
    use sdl2::mixer::{self, Chunk, InitFlag, Music as Track, AUDIO_S16LSB, MAX_VOLUME};
    use strum::IntoEnumIterator;
    use tracing::{debug, warn};

    use super::{AudioBackend, Music, Sound};
    use crate::error::AudioError;

    const AUDIO_FREQUENCY: i32 = 44_100;
    const AUDIO_CHANNELS: i32 = 8;
    const CHUNK_SIZE: i32 = 1024;
    const EXTENSIONS: [&str; 2] = ["ogg", "wav"];

    fn to_mixer_volume(volume: f32) -> i32 {
        (volume.clamp(0.0, 1.0) * MAX_VOLUME as f32).round() as i32
    }

    /// Finds `<dir>/<name>.ogg` or `<dir>/<name>.wav`.
    fn locate(dir: &Path, name: &str) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .find(|path| path.exists())
    }

    /// SDL2_mixer playback of effects from `<root>/sounds` and music from `<root>/music`.
    ///
    /// Individual files that fail to load are skipped; the game plays silently where they are missing.
    pub struct MixerAudio {
        _mixer_context: mixer::Sdl2MixerContext,
        sounds: HashMap<Sound, Chunk>,
        music: HashMap<Music, Track<'static>>,
    }

    impl MixerAudio {
        pub fn try_new(root: &Path) -> Result<Self> {
            mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, 2, CHUNK_SIZE)
                .map_err(|e| anyhow!("Failed to open audio: {}", e))?;
            mixer::allocate_channels(AUDIO_CHANNELS);
            let mixer_context =
                mixer::init(InitFlag::OGG).map_err(|e| anyhow!("Failed to initialize SDL2_mixer: {}", e))?;

            let sounds_dir = root.join("sounds");
            let sounds: HashMap<Sound, Chunk> = Sound::iter()
                .filter_map(|sound| {
                    let name: &'static str = sound.into();
                    let path = locate(&sounds_dir, name)?;
                    match Chunk::from_file(&path) {
                        Ok(chunk) => Some((sound, chunk)),
                        Err(e) => {
                            warn!("Failed to load sound {:?}: {}", sound, e);
                            None
                        }
                    }
                })
                .collect();

            let music_dir = root.join("music");
            let music: HashMap<Music, Track<'static>> = Music::iter()
                .filter_map(|music| {
                    let name: &'static str = music.into();
                    let path = locate(&music_dir, name)?;
                    match Track::from_file(&path) {
                        Ok(track) => Some((music, track)),
                        Err(e) => {
                            warn!("Failed to load music {:?}: {}", music, e);
                            None
                        }
                    }
                })
                .collect();

            debug!(sounds = sounds.len(), music = music.len(), "Audio initialized");
            Ok(Self {
                _mixer_context: mixer_context,
                sounds,
                music,
            })
        }
    }

    impl AudioBackend for MixerAudio {
        fn play_sound(&mut self, sound: Sound, volume: f32) -> Result<(), AudioError> {
            let chunk = self.sounds.get_mut(&sound).ok_or(AudioError::MissingSound(sound.into()))?;
            chunk.set_volume(to_mixer_volume(volume));
            mixer::Channel::all()
                .play(chunk, 0)
                .map(|_| ())
                .map_err(AudioError::Playback)
        }

        fn play_music(&mut self, music: Music, volume: f32) -> Result<(), AudioError> {
            let track = self.music.get(&music).ok_or(AudioError::MissingSound(music.into()))?;
            Track::set_volume(to_mixer_volume(volume));
            track.play(-1).map_err(AudioError::Playback)
        }

        fn stop_music(&mut self) -> Result<(), AudioError> {
            Track::halt();
            Ok(())
        }
    }
}
