//! Enemy spawn director
//!
//! Spawn pressure follows a host-configured piecewise-linear intensity
//! curve over a 120-second cycle, modulated by a slow sine wave and scaled
//! by the difficulty knob. At most one enemy spawns per tick.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameState};
use crate::config::Config;
use crate::consts::*;
use crate::lerp;

/// Sample the spawn curve at phase `t` in [0, 1]
///
/// Control points are evenly spaced across the cycle; adjacent points are
/// linearly interpolated and `t = 1` lands exactly on the final point.
/// Callers guarantee at least two points (config validation enforces it).
pub fn sample_curve(points: &[f32], t: f32) -> f32 {
    let segments = points.len() - 1;
    let x = t.clamp(0.0, 1.0) * segments as f32;
    let i = (x.floor() as usize).min(segments - 1);
    lerp(points[i], points[i + 1], x - i as f32)
}

/// Instantaneous spawn probability for one tick
pub fn spawn_rate(config: &Config, seconds: f32) -> f32 {
    let t = (seconds % SPAWN_CYCLE_SECONDS) / SPAWN_CYCLE_SECONDS;
    let curve = sample_curve(&config.spawn_curve, t);
    let wave = 1.0 + WAVE_AMPLITUDE * (WAVE_FREQUENCY * seconds).sin();
    (config.enemy_spawn_rate + curve * CURVE_DIFFICULTY_GAIN * config.difficulty_scale) * wave
}

/// Fall speed for an enemy spawned `seconds` into the run, before the
/// per-enemy random component
pub fn base_fall_speed(config: &Config, seconds: f32) -> f32 {
    (ENEMY_BASE_FALL_SPEED + seconds * ENEMY_FALL_SPEED_RAMP * config.difficulty_scale)
        .min(ENEMY_MAX_FALL_SPEED)
}

/// Keep spawns out of the exclusion band around the player: violators are
/// nudged straight to the near edge of the band, then clamped on-screen
pub fn place_x(x: f32, player_x: f32) -> f32 {
    let adjusted = if (x - player_x).abs() < SPAWN_EXCLUSION {
        if x < player_x {
            player_x - SPAWN_EXCLUSION
        } else {
            player_x + SPAWN_EXCLUSION
        }
    } else {
        x
    };
    adjusted.clamp(0.0, LOGICAL_WIDTH)
}

/// Roll the spawn dice for this tick and add at most one enemy
pub fn run(state: &mut GameState, config: &Config, dt: f32) {
    let seconds = state.seconds();
    if state.rng.random::<f32>() >= spawn_rate(config, seconds) * dt {
        return;
    }

    let speed = base_fall_speed(config, seconds) + state.rng.random::<f32>();
    let radius = state.rng.random_range(ENEMY_MIN_RADIUS..ENEMY_MAX_RADIUS);
    let roll = state.rng.random::<f32>() * LOGICAL_WIDTH;
    let x = place_x(roll, state.player.center().x);

    let id = state.next_entity_id();
    state.enemies.push(Enemy {
        id,
        pos: Vec2::new(x, SPAWN_Y),
        radius,
        speed,
        dead: false,
    });
}
