//! Sound and haptic cues for collision events
//!
//! The host does the actual playback. This module only decides *what* to play
//! for each contact and how loud, so it stays testable and platform-free.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{CollisionEvent, CollisionKind};

/// Hit sound pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitSound {
    /// Ball hits a side wall
    Low,
    /// Ball hits a paddle
    Mid,
    /// Ball reaches a goal line
    High,
}

impl HitSound {
    /// Suggested oscillator frequency for hosts that synthesize the sound
    pub fn tone_hz(self) -> f32 {
        match self {
            HitSound::Low => 220.0,
            HitSound::Mid => 440.0,
            HitSound::High => 880.0,
        }
    }

    /// Suggested length of the blip in seconds
    pub fn duration_secs(self) -> f32 {
        match self {
            HitSound::Low => 0.05,
            HitSound::Mid => 0.08,
            HitSound::High => 0.25,
        }
    }
}

/// Haptic impact intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Haptic {
    Soft,
    Light,
    Rigid,
}

/// What to play for one collision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub sound: HitSound,
    /// `None` when haptics are switched off
    pub haptic: Option<Haptic>,
    /// Effective sound volume (0.0 - 1.0), zero when muted
    pub volume: f32,
}

/// Unmixed cue for a collision, at full volume
pub fn cue_for(event: &CollisionEvent) -> Cue {
    let (sound, haptic) = match event.kind {
        CollisionKind::BallHitPaddle(_) => (HitSound::Mid, Haptic::Light),
        CollisionKind::BallHitWall(_) => (HitSound::Low, Haptic::Soft),
        CollisionKind::BallHitGoal(_) => (HitSound::High, Haptic::Rigid),
    };
    Cue {
        sound,
        haptic: Some(haptic),
        volume: 1.0,
    }
}

/// Applies the player's audio and haptic preferences to raw cues
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackMixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    haptics: bool,
}

impl Default for FeedbackMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackMixer {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            haptics: true,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut mixer = Self::new();
        mixer.set_master_volume(settings.master_volume);
        mixer.set_sfx_volume(settings.sfx_volume);
        mixer.set_muted(settings.muted);
        mixer.set_haptics(settings.haptics);
        mixer
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn set_haptics(&mut self, enabled: bool) {
        self.haptics = enabled;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Cue for `event`, or `None` when there is nothing to hear or feel
    pub fn cue(&self, event: &CollisionEvent) -> Option<Cue> {
        let raw = cue_for(event);
        let volume = self.effective_volume();
        let haptic = raw.haptic.filter(|_| self.haptics);
        if volume <= 0.0 && haptic.is_none() {
            return None;
        }
        Some(Cue {
            sound: raw.sound,
            haptic,
            volume,
        })
    }
}
