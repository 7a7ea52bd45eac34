use std::path::Path;

use kira::{Decibels, sound::static_sound::StaticSoundData};
use tracing::{debug, warn};
use weather_core::SoundConfig;

use super::{SoundCue, SoundError};

/// One decoded clip per cue, volume already applied. A cue whose file failed
/// to load stays silent.
#[derive(Debug, Clone, Default)]
pub struct CueClips {
    pub hover: Option<StaticSoundData>,
    pub click: Option<StaticSoundData>,
    pub error: Option<StaticSoundData>,
}

impl CueClips {
    pub fn load(dir: &Path, volumes: &SoundConfig) -> Self {
        let load = |cue: SoundCue, volume: f32| {
            let path = dir.join(cue.file_name());
            match load_clip(&path, volume) {
                Ok(clip) => {
                    debug!(path = %path.display(), "Loaded sound cue");
                    Some(clip)
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Sound cue unavailable, it will stay silent");
                    None
                }
            }
        };

        Self {
            hover: load(SoundCue::Hover, volumes.hover_volume),
            click: load(SoundCue::Click, volumes.click_volume),
            error: load(SoundCue::Error, volumes.error_volume),
        }
    }

    pub fn get(&self, cue: SoundCue) -> Option<&StaticSoundData> {
        match cue {
            SoundCue::Hover => self.hover.as_ref(),
            SoundCue::Click => self.click.as_ref(),
            SoundCue::Error => self.error.as_ref(),
        }
    }
}

fn load_clip(path: &Path, volume: f32) -> Result<StaticSoundData, SoundError> {
    let data = StaticSoundData::from_file(path)?;
    Ok(data.volume(amplitude_to_decibels(volume)))
}

/// Volumes are configured as linear amplitude (0.0..=1.0).
fn amplitude_to_decibels(amplitude: f32) -> Decibels {
    if amplitude <= 0.0 {
        Decibels::SILENCE
    } else {
        Decibels(20.0 * amplitude.min(1.0).log10())
    }
}
