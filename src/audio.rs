//! Audio cue dispatch
//!
//! Maps simulation events to sound cues and hands them to a backend.
//! Playback never feeds back into the simulation: delayed cues are queued
//! here and failures are logged and dropped.

use thiserror::Error;

use crate::sim::{SimEvent, ZombieKind};

/// Delay between a hit/miss and its cue
pub const RESULT_CUE_DELAY_MS: f64 = 100.0;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Regular zombie appears
    Spawn,
    /// Light zombie appears
    RagdollSpawn,
    /// Heavy zombie appears
    TankSpawn,
    /// Regular zombie shot
    Hit,
    /// Light zombie shot
    RagdollDeath,
    /// Heavy zombie shot (before it gets back up)
    TankDeath,
    /// Wrong answer
    Missed,
    /// Answer submitted during cooldown
    CannotShoot,
    GameOver,
    /// Player changed lane
    Step,
    Shoot,
}

impl SoundEffect {
    /// Asset the backend should play
    pub fn file(&self) -> &'static str {
        match self {
            SoundEffect::Spawn => "spawn.mp3",
            SoundEffect::RagdollSpawn => "meow.mp3",
            SoundEffect::TankSpawn => "wroom.mp3",
            SoundEffect::Hit => "hit.mp3",
            SoundEffect::RagdollDeath => "catscream.mp3",
            SoundEffect::TankDeath => "explosion.mp3",
            SoundEffect::Missed => "missed.mp3",
            SoundEffect::CannotShoot => "cannot-shoot.mp3",
            SoundEffect::GameOver => "game-over.mp3",
            SoundEffect::Step => "step.mp3",
            SoundEffect::Shoot => "shoot.mp3",
        }
    }

    /// Per-cue mix level (0.0 - 1.0)
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundEffect::Spawn => 0.2,
            SoundEffect::Hit => 0.7,
            SoundEffect::RagdollSpawn
            | SoundEffect::TankSpawn
            | SoundEffect::RagdollDeath
            | SoundEffect::TankDeath => 0.5,
            _ => 1.0,
        }
    }

    /// Cue and delay for a simulation event, if it has one
    pub fn for_event(event: &SimEvent) -> Option<(SoundEffect, f64)> {
        let cue = match *event {
            SimEvent::Spawned { kind, .. } => match kind {
                ZombieKind::Base => (SoundEffect::Spawn, 0.0),
                ZombieKind::Light => (SoundEffect::RagdollSpawn, 0.0),
                ZombieKind::Heavy => (SoundEffect::TankSpawn, 0.0),
            },
            SimEvent::Hit {
                kind, transforming, ..
            } => {
                let effect = match kind {
                    ZombieKind::Light => SoundEffect::RagdollDeath,
                    ZombieKind::Heavy if transforming => SoundEffect::TankDeath,
                    _ => SoundEffect::Hit,
                };
                (effect, RESULT_CUE_DELAY_MS)
            }
            SimEvent::Miss => (SoundEffect::Missed, RESULT_CUE_DELAY_MS),
            SimEvent::Shoot => (SoundEffect::Shoot, 0.0),
            SimEvent::CannotShoot => (SoundEffect::CannotShoot, 0.0),
            SimEvent::GameOver { .. } => (SoundEffect::GameOver, 0.0),
            SimEvent::LaneMove { .. } => (SoundEffect::Step, 0.0),
            SimEvent::Transformed { .. } | SimEvent::Restarted => return None,
        };
        Some(cue)
    }
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound asset not loaded: {0}")]
    NotLoaded(&'static str),
}

/// Something that can actually make noise
pub trait CueSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
}

/// Backend that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl CueSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        log::debug!("cue {} @ {:.2}", effect.file(), volume);
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager<S: CueSink> {
    sink: S,
    master_volume: f32,
    muted: bool,
    /// Browsers refuse playback before the first user gesture
    user_interacted: bool,
    /// (due time, effect), fired by `update`
    pending: Vec<(f64, SoundEffect)>,
}

impl<S: CueSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            muted: false,
            user_interacted: false,
            pending: Vec::new(),
        }
    }

    /// Record the first user gesture; nothing plays before it
    pub fn mark_interacted(&mut self) {
        self.user_interacted = true;
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * effect.base_volume()
        }
    }

    /// Queue or play the cue for `event`
    pub fn handle(&mut self, event: &SimEvent, now_ms: f64) {
        if !self.user_interacted {
            return;
        }
        let Some((effect, delay)) = SoundEffect::for_event(event) else {
            return;
        };
        if delay > 0.0 {
            self.pending.push((now_ms + delay, effect));
        } else {
            self.play(effect);
        }
    }

    /// Fire delayed cues that are due
    pub fn update(&mut self, now_ms: f64) {
        let mut due = Vec::new();
        self.pending.retain(|&(at, effect)| {
            if at <= now_ms {
                due.push(effect);
                false
            } else {
                true
            }
        });
        for effect in due {
            self.play(effect);
        }
    }

    /// Cues still waiting for their delay
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return;
        }
        if let Err(e) = self.sink.play(effect, vol) {
            log::debug!("Dropped cue {:?}: {}", effect, e);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        played: Vec<SoundEffect>,
        fail: bool,
    }

    impl CueSink for Recorder {
        fn play(&mut self, effect: SoundEffect, _volume: f32) -> Result<(), AudioError> {
            if self.fail {
                return Err(AudioError::NotLoaded(effect.file()));
            }
            self.played.push(effect);
            Ok(())
        }
    }

    #[test]
    fn test_silent_until_interaction() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.handle(&SimEvent::Shoot, 0.0);
        assert!(audio.sink().played.is_empty());
        audio.mark_interacted();
        audio.handle(&SimEvent::Shoot, 0.0);
        assert_eq!(audio.sink().played, vec![SoundEffect::Shoot]);
    }

    #[test]
    fn test_hit_cue_is_delayed() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.mark_interacted();
        let hit = SimEvent::Hit {
            id: 1,
            kind: ZombieKind::Heavy,
            transforming: true,
        };
        audio.handle(&hit, 1000.0);
        assert_eq!(audio.pending(), 1);
        audio.update(1050.0);
        assert!(audio.sink().played.is_empty());
        audio.update(1100.0);
        assert_eq!(audio.sink().played, vec![SoundEffect::TankDeath]);
        assert_eq!(audio.pending(), 0);
    }

    #[test]
    fn test_cue_table() {
        let light_hit = SimEvent::Hit {
            id: 1,
            kind: ZombieKind::Light,
            transforming: false,
        };
        assert_eq!(
            SoundEffect::for_event(&light_hit),
            Some((SoundEffect::RagdollDeath, RESULT_CUE_DELAY_MS))
        );
        assert_eq!(
            SoundEffect::for_event(&SimEvent::LaneMove { row: 2 }),
            Some((SoundEffect::Step, 0.0))
        );
        assert_eq!(SoundEffect::for_event(&SimEvent::Restarted), None);
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        let mut audio = AudioManager::new(Recorder {
            fail: true,
            ..Default::default()
        });
        audio.mark_interacted();
        audio.handle(&SimEvent::GameOver { score: 3 }, 0.0);
        assert!(audio.sink().played.is_empty());
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.mark_interacted();
        audio.set_muted(true);
        audio.handle(&SimEvent::Miss, 0.0);
        audio.update(500.0);
        assert!(audio.sink().played.is_empty());
    }
}
