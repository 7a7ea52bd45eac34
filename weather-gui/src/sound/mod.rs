//! UI sound effects: three cues and a throttled round-robin pool for hover,
//! played on the default audio device.

use std::{
    fmt::Debug,
    time::{Duration, Instant},
};

mod clip;
mod output;

pub use clip::CueClips;
pub use output::{KiraOutput, SilentOutput, SoundError};

/// Hover voices that may overlap each other.
pub const HOVER_POOL_SIZE: usize = 6;

/// Hover triggers closer together than this are dropped.
pub const HOVER_MIN_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Hover,
    Click,
    Error,
}

impl SoundCue {
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::Hover => "hover.wav",
            SoundCue::Click => "click.wav",
            SoundCue::Error => "error.wav",
        }
    }
}

/// One playback slot. Restarting a voice cuts off only that voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    Hover(usize),
    Click,
    Error,
}

impl Voice {
    pub const COUNT: usize = HOVER_POOL_SIZE + 2;

    pub fn index(self) -> usize {
        match self {
            Voice::Hover(slot) => slot % HOVER_POOL_SIZE,
            Voice::Click => HOVER_POOL_SIZE,
            Voice::Error => HOVER_POOL_SIZE + 1,
        }
    }

    pub fn cue(self) -> SoundCue {
        match self {
            Voice::Hover(_) => SoundCue::Hover,
            Voice::Click => SoundCue::Click,
            Voice::Error => SoundCue::Error,
        }
    }
}

/// Something that can start a voice without blocking.
pub trait VoiceOutput: Debug {
    fn start(&mut self, voice: Voice);
}

/// Throttle and slot rotation for the hover cue.
#[derive(Debug, Default)]
pub struct HoverPool {
    next_slot: usize,
    last_accepted: Option<Instant>,
}

impl HoverPool {
    /// Returns the slot to play, or `None` if the trigger came too soon after
    /// the last accepted one. Rejected triggers leave the state untouched.
    pub fn accept(&mut self, now: Instant) -> Option<usize> {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < HOVER_MIN_INTERVAL {
                return None;
            }
        }

        self.last_accepted = Some(now);
        let slot = self.next_slot;
        self.next_slot = (self.next_slot + 1) % HOVER_POOL_SIZE;
        Some(slot)
    }
}

#[derive(Debug)]
pub struct SoundBoard {
    output: Box<dyn VoiceOutput>,
    hover: HoverPool,
}

impl SoundBoard {
    pub fn new(output: Box<dyn VoiceOutput>) -> Self {
        Self {
            output,
            hover: HoverPool::default(),
        }
    }

    /// Fire-and-forget. Returns whether the cue was actually started.
    pub fn play(&mut self, cue: SoundCue, now: Instant) -> bool {
        let voice = match cue {
            SoundCue::Hover => match self.hover.accept(now) {
                Some(slot) => Voice::Hover(slot),
                None => return false,
            },
            SoundCue::Click => Voice::Click,
            SoundCue::Error => Voice::Error,
        };

        self.output.start(voice);
        true
    }
}
