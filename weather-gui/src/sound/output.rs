use std::{fmt, path::Path};

use kira::{
    AudioManager, AudioManagerSettings, DefaultBackend, Tween,
    sound::{FromFileError, static_sound::StaticSoundHandle},
};
use thiserror::Error;
use tracing::{info, warn};
use weather_core::SoundConfig;

use super::{CueClips, Voice, VoiceOutput};

#[derive(Debug, Error)]
pub enum SoundError {
    #[error("Failed to load sound: {0}")]
    Load(#[from] FromFileError),
    #[error("Failed to open audio output: {0}")]
    Backend(String),
}

/// Plays voices through the default output device. Each voice keeps the
/// handle of its last play so a restart stops only that instance.
pub struct KiraOutput {
    manager: AudioManager<DefaultBackend>,
    clips: CueClips,
    handles: Vec<Option<StaticSoundHandle>>,
}

impl fmt::Debug for KiraOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KiraOutput")
            .field("clips", &self.clips)
            .finish_non_exhaustive()
    }
}

impl KiraOutput {
    pub fn open(sounds_dir: &Path, volumes: &SoundConfig) -> Result<Self, SoundError> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| SoundError::Backend(format!("{e:?}")))?;
        let clips = CueClips::load(sounds_dir, volumes);

        info!(dir = %sounds_dir.display(), "Audio output ready");

        Ok(Self {
            manager,
            clips,
            handles: (0..Voice::COUNT).map(|_| None).collect(),
        })
    }
}

impl VoiceOutput for KiraOutput {
    fn start(&mut self, voice: Voice) {
        let Some(data) = self.clips.get(voice.cue()) else {
            return;
        };

        let slot = &mut self.handles[voice.index()];
        if let Some(mut previous) = slot.take() {
            previous.stop(Tween::default());
        }

        match self.manager.play(data.clone()) {
            Ok(handle) => *slot = Some(handle),
            Err(err) => warn!(?voice, error = ?err, "Failed to play sound cue"),
        }
    }
}

/// Used when no audio device could be opened.
#[derive(Debug, Default)]
pub struct SilentOutput;

impl VoiceOutput for SilentOutput {
    fn start(&mut self, _voice: Voice) {}
}
