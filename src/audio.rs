//! Audio cues using the Web Audio API
//!
//! Procedurally generated - no sound files to ship. Cues are
//! fire-and-forget notifications from the game loop; a sink that fails to
//! play never affects game logic.

/// The four moments the game announces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Idle screen shown
    IntroStart,
    /// Run started
    PlayStart,
    /// Coin caught
    Catch,
    /// Run ended
    GameOver,
}

/// Audio collaborator boundary. Implementations must not panic; whatever
/// goes wrong stays on their side of the fence.
pub trait AudioSink {
    fn play(&self, cue: AudioCue);
}

/// Sink that swallows every cue (tests, headless runs)
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&self, _cue: AudioCue) {}
}

#[cfg(target_arch = "wasm32")]
pub use web_audio::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web_audio {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioCue, AudioSink};
    use crate::settings::Settings;

    /// Oscillator-synth sink for the browser
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl WebAudio {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        pub fn set_volume(&mut self, settings: &Settings) {
            self.volume = settings.effective_volume();
        }

        /// Oscillator plus gain envelope wired to the destination
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

        /// Intro - slow minor arpeggio while the goblin waits
        fn play_intro(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            for (i, freq) in [220.0, 261.6, 329.6].iter().enumerate() {
                let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) else {
                    return;
                };
                let start = t + i as f64 * 0.25;
                gain.gain().set_value_at_time(vol * 0.2, start).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, start + 0.4)
                    .ok();
                osc.start_with_when(start).ok();
                osc.stop_with_when(start + 0.45).ok();
            }
        }

        /// Run start - quick rising chirp
        fn play_start(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 330.0, OscillatorType::Square) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.25, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                .ok();
            osc.frequency().set_value_at_time(330.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(660.0, t + 0.25)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.35).ok();
        }

        /// Coin catch - bright ping
        fn play_catch(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 880.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(880.0, t).ok();
            osc.frequency().set_value_at_time(1320.0, t + 0.05).ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Game over - descending groan
        fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.8)
                .ok();
            osc.frequency().set_value_at_time(220.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(55.0, t + 0.7)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.85).ok();
        }
    }

    impl AudioSink for WebAudio {
        fn play(&self, cue: AudioCue) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers suspend contexts until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match cue {
                AudioCue::IntroStart => self.play_intro(ctx, vol),
                AudioCue::PlayStart => self.play_start(ctx, vol),
                AudioCue::Catch => self.play_catch(ctx, vol),
                AudioCue::GameOver => self.play_game_over(ctx, vol),
            }
        }
    }
}
