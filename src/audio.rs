//! Audio cue engine using the Web Audio API
//!
//! Procedurally generated cues - no external files needed. The simulation
//! reports events; this layer decides which cue to fire and when to stay
//! quiet. Per-kind throttling over host-supplied wall-clock milliseconds
//! keeps shockwave chains from flooding the mixer. Off wasm there is no
//! mixer and cues degrade to trace logs, so the tick never stalls.

use crate::config::Config;
use crate::sim::GameEvent;

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Procedural cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueKind {
    /// Normal recoil jump
    Jump,
    /// Dead-zone super jump
    DeadJump,
    /// Shockwave created
    Shockwave,
    /// Dry fire - jump rejected for lack of fuel
    Pulse,
    /// Enemy eliminated
    Kill,
}

impl CueKind {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        match self {
            CueKind::Jump => 0,
            CueKind::DeadJump => 1,
            CueKind::Shockwave => 2,
            CueKind::Pulse => 3,
            CueKind::Kill => 4,
        }
    }

    /// Minimum wall-clock gap between two cues of the same kind
    fn throttle_ms(self) -> f64 {
        match self {
            CueKind::Kill => 60.0,
            _ => 50.0,
        }
    }
}

/// Last-trigger table, one slot per cue kind
#[derive(Debug, Default)]
pub struct CueTimers {
    last_ms: [Option<f64>; CueKind::COUNT],
}

impl CueTimers {
    /// Record and allow the cue unless one of the same kind fired within
    /// its throttle window
    pub fn try_fire(&mut self, kind: CueKind, now_ms: f64) -> bool {
        let slot = &mut self.last_ms[kind.index()];
        if let Some(last) = *slot {
            if now_ms - last < kind.throttle_ms() {
                return false;
            }
        }
        *slot = Some(now_ms);
        true
    }
}

/// Maps simulation events to throttled procedural cues
pub struct AudioDirector {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    timers: CueTimers,
}

impl Default for AudioDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDirector {
    pub fn new() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            ctx: create_context(),
            timers: CueTimers::default(),
        }
    }

    /// Resume the context after a user gesture; browsers start suspended
    pub fn resume(&self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Fire cues for one tick's worth of events. `now_ms` is the host's
    /// wall clock; the simulation's tick counter never reaches here.
    pub fn handle_events(&mut self, events: &[GameEvent], config: &Config, now_ms: f64) {
        for event in events {
            let kind = match event {
                GameEvent::Jumped { is_super: false } => CueKind::Jump,
                GameEvent::Jumped { is_super: true } => CueKind::DeadJump,
                GameEvent::JumpRejected => CueKind::Pulse,
                GameEvent::ShockwaveSpawned { .. } => CueKind::Shockwave,
                GameEvent::EnemyKilled { .. } => CueKind::Kill,
                // Game-over presentation belongs to the host
                GameEvent::GameOver { .. } => continue,
            };
            self.trigger(kind, config, now_ms);
        }
    }

    /// Throttled single-cue trigger; reports whether the cue fired.
    /// Disabled audio keeps no throttle bookkeeping.
    pub fn trigger(&mut self, kind: CueKind, config: &Config, now_ms: f64) -> bool {
        let vol = effective_volume(config);
        if vol <= 0.0 {
            return false;
        }
        if !self.timers.try_fire(kind, now_ms) {
            return false;
        }
        self.play(kind, vol);
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn play(&self, kind: CueKind, _vol: f32) {
        // No native mixer; the trigger is still observable in trace logs
        log::trace!("cue {kind:?}");
    }

    #[cfg(target_arch = "wasm32")]
    fn play(&self, kind: CueKind, vol: f32) {
        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match kind {
            CueKind::Jump => self.play_jump(ctx, vol),
            CueKind::DeadJump => self.play_dead_jump(ctx, vol),
            CueKind::Shockwave => self.play_shockwave(ctx, vol),
            CueKind::Pulse => self.play_pulse(ctx, vol),
            CueKind::Kill => self.play_kill(ctx, vol),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    #[cfg(target_arch = "wasm32")]
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

    /// Jump - whoosh up
    #[cfg(target_arch = "wasm32")]
    fn play_jump(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.2)
            .ok();
        osc.frequency().set_value_at_time(200.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(600.0, t + 0.15)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.25).ok();
    }

    /// Dead-zone super jump - boom with a crack on top
    #[cfg(target_arch = "wasm32")]
    fn play_dead_jump(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();

        if let Some((osc, gain)) = self.create_osc(ctx, 100.0, OscillatorType::Sawtooth) {
            gain.gain().set_value_at_time(vol * 0.5, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                .ok();
            osc.frequency().set_value_at_time(100.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(30.0, t + 0.4)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.5).ok();
        }

        if let Some((osc, gain)) = self.create_osc(ctx, 1500.0, OscillatorType::Square) {
            gain.gain().set_value_at_time(vol * 0.2, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }
    }

    /// Shockwave - descending whoosh
    #[cfg(target_arch = "wasm32")]
    fn play_shockwave(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 600.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(0.01, t).ok();
        gain.gain()
            .linear_ramp_to_value_at_time(vol * 0.3, t + 0.1)
            .ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.4)
            .ok();
        osc.frequency().set_value_at_time(600.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(150.0, t + 0.4)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.5).ok();
    }

    /// Dry fire - soft low tap
    #[cfg(target_arch = "wasm32")]
    fn play_pulse(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.2, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.06)
            .ok();
        osc.frequency().set_value_at_time(150.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(80.0, t + 0.06)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.08).ok();
    }

    /// Kill - short zap over a bass thump
    #[cfg(target_arch = "wasm32")]
    fn play_kill(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();

        if let Some((osc, gain)) = self.create_osc(ctx, 900.0, OscillatorType::Square) {
            gain.gain().set_value_at_time(vol * 0.25, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.frequency().set_value_at_time(900.0, t).ok();
            osc.frequency().set_value_at_time(1400.0, t + 0.02).ok();
            osc.frequency().set_value_at_time(700.0, t + 0.05).ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.12).ok();
        }

        if let Some((osc, gain)) = self.create_osc(ctx, 70.0, OscillatorType::Sine) {
            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn create_context() -> Option<AudioContext> {
    // May fail outside a secure context
    let ctx = AudioContext::new().ok();
    if ctx.is_none() {
        log::warn!("Failed to create AudioContext - audio disabled");
    }
    ctx
}

fn effective_volume(config: &Config) -> f32 {
    if !config.audio_enabled {
        0.0
    } else {
        config.sfx_volume.clamp(0.0, 1.0)
    }
}
