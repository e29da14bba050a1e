//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!
//! Each effect is a single oscillator with an exponential pitch sweep and
//! gain decay. The tone table is plain data so it can be checked natively;
//! only `AudioManager` touches the browser.

use crate::sim::{EnemyKind, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player volley
    Shoot,
    /// Red enemy destroyed
    Explosion,
    /// Power-up collected
    PowerUp,
    /// Player lost health
    Damage,
    /// Run ended
    GameOver,
    /// Orange/purple enemy hit or destroyed
    BossHit,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One synthesized tone: pitch and gain both sweep over `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub freq_start: f32,
    pub freq_end: f32,
    pub gain_start: f32,
    pub gain_end: f32,
    /// Seconds
    pub duration: f64,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 6] = [
        SoundEffect::Shoot,
        SoundEffect::Explosion,
        SoundEffect::PowerUp,
        SoundEffect::Damage,
        SoundEffect::GameOver,
        SoundEffect::BossHit,
    ];

    pub fn tone(&self) -> Tone {
        let (waveform, freq_start, freq_end, gain_start, duration) = match self {
            SoundEffect::Shoot => (Waveform::Sine, 800.0, 200.0, 0.1, 0.1),
            SoundEffect::Explosion => (Waveform::Sawtooth, 200.0, 20.0, 0.3, 0.3),
            SoundEffect::PowerUp => (Waveform::Sine, 400.0, 1200.0, 0.2, 0.2),
            SoundEffect::Damage => (Waveform::Square, 150.0, 50.0, 0.2, 0.15),
            SoundEffect::GameOver => (Waveform::Sine, 400.0, 100.0, 0.3, 0.5),
            SoundEffect::BossHit => (Waveform::Triangle, 300.0, 150.0, 0.15, 0.2),
        };
        Tone {
            waveform,
            freq_start,
            freq_end,
            gain_start,
            gain_end: 0.01,
            duration,
        }
    }

    /// Which sound (if any) a simulation event makes
    pub fn for_event(event: &GameEvent) -> Option<SoundEffect> {
        match event {
            GameEvent::Shot => Some(SoundEffect::Shoot),
            GameEvent::EnemyDestroyed {
                kind: EnemyKind::Red,
                ..
            } => Some(SoundEffect::Explosion),
            GameEvent::EnemyDestroyed { .. } => Some(SoundEffect::BossHit),
            GameEvent::EnemyHit(kind) if kind.is_boss_class() => Some(SoundEffect::BossHit),
            GameEvent::PowerUpCollected(_) => Some(SoundEffect::PowerUp),
            GameEvent::PlayerDamaged => Some(SoundEffect::Damage),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            _ => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

    use super::{SoundEffect, Tone, Waveform};

    impl Waveform {
        fn oscillator_type(&self) -> OscillatorType {
            match self {
                Waveform::Sine => OscillatorType::Sine,
                Waveform::Square => OscillatorType::Square,
                Waveform::Sawtooth => OscillatorType::Sawtooth,
                Waveform::Triangle => OscillatorType::Triangle,
            }
        }
    }

    /// Audio manager for the game
    ///
    /// Any Web Audio failure disables sound for the rest of the session.
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(volume: f32) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: volume.clamp(0.0, 1.0),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                if ctx.state() == AudioContextState::Suspended {
                    let _ = ctx.resume();
                }
            }
        }

        /// Set the effective volume (0 when muted)
        pub fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }

        /// Play a sound effect
        pub fn play(&mut self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            if self.play_tone(ctx, effect.tone()).is_none() {
                log::warn!("Failed to play {:?} - audio disabled", effect);
                self.ctx = None;
            }
        }

        /// Create an oscillator routed through a gain node
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn play_tone(&self, ctx: &AudioContext, tone: Tone) -> Option<()> {
            let (osc, gain) =
                self.create_osc(ctx, tone.freq_start, tone.waveform.oscillator_type())?;
            let t = ctx.current_time();
            let end = t + tone.duration;

            osc.frequency().set_value_at_time(tone.freq_start, t).ok()?;
            osc.frequency()
                .exponential_ramp_to_value_at_time(tone.freq_end, end)
                .ok()?;
            gain.gain()
                .set_value_at_time(tone.gain_start * self.volume, t)
                .ok()?;
            gain.gain()
                .exponential_ramp_to_value_at_time(tone.gain_end * self.volume, end)
                .ok()?;

            osc.start().ok()?;
            osc.stop_with_when(end).ok()?;
            Some(())
        }
    }
}
