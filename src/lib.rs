//! Backblast - a recoil-jump arcade survival game
//!
//! The player body has no thrusters of its own: every move is a recoil
//! impulse fired opposite a pointer target, paid for in fuel, while enemies
//! rain down from the top of the arena. This crate is the simulation core
//! only; rendering, input mapping and windowing are host concerns built on
//! the per-tick snapshot the core produces.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, state)
//! - `config`: Host-supplied tuning snapshot with fail-fast validation
//! - `audio`: Simulation-event to procedural-cue mapping with throttling
//! - `game`: Session facade (advance / snapshot / high score)

pub mod audio;
pub mod config;
pub mod game;
pub mod sim;

pub use config::{Config, ConfigError, PlayerShape};
pub use game::{Game, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Logical playfield width; all positions live in this space
    pub const LOGICAL_WIDTH: f32 = 400.0;
    /// Logical playfield height
    pub const LOGICAL_HEIGHT: f32 = 600.0;
    /// Simulation ticks per second (scoring and spawn-curve time base)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Fuel capacity; the player resets full
    pub const MAX_FUEL: f32 = 100.0;
    /// Per-tick horizontal velocity damping
    pub const AIR_RESISTANCE: f32 = 0.99;
    /// Player spawn height as a fraction of the playfield
    pub const PLAYER_START_Y_FRAC: f32 = 0.4;
    /// Player size used before the first reset supplies a config value
    pub const DEFAULT_PLAYER_SIZE: f32 = 30.0;

    /// Contact-immunity window granted by a dead-zone super jump (ticks)
    pub const SUPER_JUMP_INVINCIBILITY_TICKS: u32 = 15;
    /// Player flash set on any kill (ticks)
    pub const KILL_FLASH_TICKS: u32 = 10;

    /// Enemy spawn height above the visible top edge
    pub const SPAWN_Y: f32 = -20.0;
    /// Minimum horizontal gap between a spawn and the player's center
    pub const SPAWN_EXCLUSION: f32 = 60.0;
    /// Enemies this far past the bottom edge are pruned
    pub const OFFSCREEN_MARGIN: f32 = 50.0;

    /// Enemy radius range at spawn
    pub const ENEMY_MIN_RADIUS: f32 = 10.0;
    pub const ENEMY_MAX_RADIUS: f32 = 18.0;
    /// Fall speed ramps from the base by `ramp` per second of play,
    /// scaled by difficulty, up to the cap
    pub const ENEMY_BASE_FALL_SPEED: f32 = 1.5;
    pub const ENEMY_FALL_SPEED_RAMP: f32 = 0.05;
    pub const ENEMY_MAX_FALL_SPEED: f32 = 8.0;

    /// Spawn-curve cycle length in seconds
    pub const SPAWN_CYCLE_SECONDS: f32 = 120.0;
    /// Slow sinusoidal spawn-rate modulation: 1 + A * sin(F * seconds)
    pub const WAVE_AMPLITUDE: f32 = 0.6;
    pub const WAVE_FREQUENCY: f32 = 0.8;
    /// Curve contribution scale in the spawn-rate formula
    pub const CURVE_DIFFICULTY_GAIN: f32 = 0.1;

    /// Pulse lifetimes in ticks
    pub const PULSE_LIFE_NORMAL: f32 = 8.0;
    pub const PULSE_LIFE_SUPER: f32 = 15.0;
    /// Pulse width padding over the player width
    pub const PULSE_PAD_NORMAL: f32 = 10.0;
    pub const PULSE_PAD_SUPER: f32 = 30.0;

    /// Exhaust burst sizes
    pub const JUMP_PARTICLES_NORMAL: usize = 20;
    pub const JUMP_PARTICLES_SUPER: usize = 40;
    /// Kill burst sizes
    pub const KILL_PARTICLES_NORMAL: usize = 12;
    pub const KILL_PARTICLES_SUPER: usize = 20;
    /// Exhaust angular jitter in radians, either side of the beam axis
    pub const JUMP_PARTICLE_JITTER: f32 = 0.75;
    /// Particles feel this fraction of gravity and no drag
    pub const PARTICLE_GRAVITY_SCALE: f32 = 0.3;
    /// Cosmetic particle cap; oldest evicted first
    pub const MAX_PARTICLES: usize = 256;

    /// Lethal-contact distance forgiveness
    pub const CONTACT_SLACK: f32 = 2.0;
    /// Child shockwave max-radius scale per chain link
    pub const SHOCKWAVE_CHAIN_SCALE: f32 = 0.8;

    /// Points per survived second
    pub const SCORE_PER_SECOND: u64 = 10;

    /// Camera-shake seeds; shake decays x0.9 per tick, clamped to 1.0
    pub const SHAKE_WALL_SCALE: f32 = 0.04;
    pub const SHAKE_FAILED_JUMP: f32 = 0.1;
    pub const SHAKE_JUMP: f32 = 0.25;
    pub const SHAKE_SUPER_JUMP: f32 = 0.6;
}

/// Linear interpolation from `a` to `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
