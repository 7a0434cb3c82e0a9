//! Per-tick simulation step
//!
//! One `tick` call advances the world by one logical tick in a fixed
//! stage order: interaction, jump, physics, spawning, eliminations,
//! pruning. The host calls it once per display refresh; `dt` flows
//! through the arithmetic but the design ties one tick to one frame, so
//! hosts pass 1.0.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use super::{collision, jump, spawn};
use crate::config::Config;
use crate::consts::*;

/// Input commands for a single tick (edge-triggered, not held)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump target in logical coordinates, mapped by the host from
    /// pointer or touch position
    pub jump_target: Option<Vec2>,
    /// Start or restart interaction
    pub interact: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, config: &Config, input: &TickInput, dt: f32) {
    state.events.clear();

    // A start/restart interaction consumes the whole call
    if input.interact && matches!(state.phase, GamePhase::Start | GamePhase::GameOver) {
        state.reset(config);
        log::info!("run started (seed {})", state.seed);
        return;
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.ticks += 1;

    // Decay camera shake
    state.shake *= 0.9;
    if state.shake < 0.01 {
        state.shake = 0.0;
    }

    // Jump input lands before physics so the impulse moves the player
    // this same tick
    if let Some(target) = input.jump_target {
        jump::resolve(state, config, target);
    }

    integrate(state, config, dt);

    // A fall during integration freezes the rest of the pipeline
    if state.phase == GamePhase::Playing {
        spawn::run(state, config, dt);
        collision::shockwave_pass(state, config);
        collision::contact_pass(state);
    }

    prune(state);
}

/// Move bodies and age timers for one tick
fn integrate(state: &mut GameState, config: &Config, dt: f32) {
    state.player.vel.y += config.gravity * dt;
    let step = state.player.vel * dt;
    state.player.pos += step;
    state.player.vel.x *= AIR_RESISTANCE;

    // Side walls clamp and reflect, seeding shake from impact speed.
    // There is no ceiling: a super jump may carry the player above the
    // visible top, and gravity brings it back.
    let max_x = LOGICAL_WIDTH - state.player.size;
    if state.player.pos.x < 0.0 || state.player.pos.x > max_x {
        state.player.pos.x = state.player.pos.x.clamp(0.0, max_x);
        state.player.vel.x = -state.player.vel.x * config.bounce_elasticity;
        state.shake =
            (state.shake + state.player.vel.x.abs() * SHAKE_WALL_SCALE).min(1.0);
    }

    state.player.fuel = (state.player.fuel + config.fuel_regen * dt).min(state.player.max_fuel);
    state.player.flash_ticks = state.player.flash_ticks.saturating_sub(1);
    state.player.invincibility_ticks = state.player.invincibility_ticks.saturating_sub(1);

    // Falling off the bottom ends the run; everything else still moves
    // this tick
    if state.player.pos.y > LOGICAL_HEIGHT {
        state.game_over("fell");
    }

    for enemy in &mut state.enemies {
        enemy.pos.y += enemy.speed * dt;
    }

    // Particles feel reduced gravity and no drag
    for particle in &mut state.particles {
        particle.vel.y += config.gravity * PARTICLE_GRAVITY_SCALE * dt;
        particle.pos += particle.vel * dt;
        particle.life -= dt;
    }

    for pulse in &mut state.pulses {
        pulse.life -= dt;
    }

    // Shockwaves ride the player and follow the eased radius curve
    let center = state.player.center();
    for wave in &mut state.shockwaves {
        wave.pos = center;
        wave.life -= dt;
        wave.radius = wave.current_radius();
    }
}

/// Drop dead and expired entities so they never reach the next view
fn prune(state: &mut GameState) {
    state
        .enemies
        .retain(|e| !e.dead && e.pos.y <= LOGICAL_HEIGHT + OFFSCREEN_MARGIN);
    state.particles.retain(|p| p.life > 0.0);
    state.pulses.retain(|p| p.life > 0.0);
    state.shockwaves.retain(|w| w.life > 0.0);
}
