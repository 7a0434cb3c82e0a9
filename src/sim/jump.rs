//! Recoil jump resolution
//!
//! A jump hurls the player directly away from the pointer target, spends
//! fuel and fires the one-shot pulse elimination pass. Jumps started from
//! the bottom dead-zone band become super jumps: multiplied impulse, a
//! short invincibility window, a wider pulse and an inverted kill side.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::state::{GameEvent, GameState, Particle, ParticleKind, Pulse};
use crate::config::Config;
use crate::consts::*;

/// Execute one jump command. Caller guarantees the `Playing` phase.
pub fn resolve(state: &mut GameState, config: &Config, target: Vec2) {
    // Fuel gate: a dry fire gives feedback but changes no physics
    if state.player.fuel < config.fuel_consumption {
        state.shake = (state.shake + SHAKE_FAILED_JUMP).min(1.0);
        state.events.push(GameEvent::JumpRejected);
        return;
    }

    let center = state.player.center();
    let dir = (target - center).normalize_or_zero();

    let in_dead_zone = config.dead_jump_enabled
        && state.player.bottom() > LOGICAL_HEIGHT * (1.0 - config.dead_zone_threshold);

    let force = if in_dead_zone {
        state.player.invincibility_ticks = SUPER_JUMP_INVINCIBILITY_TICKS;
        state.shake = (state.shake + SHAKE_SUPER_JUMP).min(1.0);
        config.recoil_force * config.super_jump_multiplier
    } else {
        state.shake = (state.shake + SHAKE_JUMP).min(1.0);
        config.recoil_force
    };

    // Impulse replaces the current velocity outright
    state.player.vel = -dir * force;
    state.player.fuel -= config.fuel_consumption;

    let (pad, life) = if in_dead_zone {
        (PULSE_PAD_SUPER, PULSE_LIFE_SUPER)
    } else {
        (PULSE_PAD_NORMAL, PULSE_LIFE_NORMAL)
    };
    let pulse = Pulse {
        pos: center,
        width: state.player.size + pad,
        life,
        max_life: life,
        is_super: in_dead_zone,
    };
    collision::pulse_pass(state, config, &pulse);
    state.pulses.push(pulse);

    spawn_exhaust(state, dir, in_dead_zone);
    state.events.push(GameEvent::Jumped { is_super: in_dead_zone });
}

/// Exhaust burst sprayed toward the target, opposite the recoil motion
fn spawn_exhaust(state: &mut GameState, dir: Vec2, is_super: bool) {
    let (count, kind) = if is_super {
        (JUMP_PARTICLES_SUPER, ParticleKind::SuperJump)
    } else {
        (JUMP_PARTICLES_NORMAL, ParticleKind::Jump)
    };
    let base_angle = dir.y.atan2(dir.x);
    let origin = state.player.center();

    for _ in 0..count {
        let angle =
            base_angle + state.rng.random_range(-JUMP_PARTICLE_JITTER..JUMP_PARTICLE_JITTER);
        let speed = state.rng.random_range(1.0..5.0);
        let life = state.rng.random_range(20.0..40.0);
        state.push_particle(Particle {
            pos: origin,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life,
            max_life: life,
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;

    fn playing(seed: u64) -> (GameState, Config) {
        let config = Config::default();
        let mut state = GameState::new(seed);
        state.reset(&config);
        (state, config)
    }

    #[test]
    fn jump_recoils_away_from_target_and_spends_fuel() {
        let (mut state, config) = playing(1);
        let fuel_before = state.player.fuel;
        // Aim straight down: recoil carries the player straight up
        let target = state.player.center() + Vec2::new(0.0, 100.0);
        resolve(&mut state, &config, target);

        assert_eq!(state.player.vel.x, 0.0);
        assert_eq!(state.player.vel.y, -config.recoil_force);
        assert_eq!(state.player.fuel, fuel_before - config.fuel_consumption);
        assert_eq!(state.pulses.len(), 1);
        assert!(!state.pulses[0].is_super);
        assert_eq!(state.particles.len(), JUMP_PARTICLES_NORMAL);
        assert!(state.events.contains(&GameEvent::Jumped { is_super: false }));
    }

    #[test]
    fn empty_tank_rejects_the_jump_without_side_effects() {
        let (mut state, config) = playing(2);
        state.player.fuel = config.fuel_consumption - 0.1;
        let fuel_before = state.player.fuel;
        let vel_before = state.player.vel;
        let target = state.player.center() + Vec2::new(50.0, 50.0);
        resolve(&mut state, &config, target);

        assert_eq!(state.player.fuel, fuel_before);
        assert_eq!(state.player.vel, vel_before);
        assert!(state.pulses.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.events, vec![GameEvent::JumpRejected]);
        assert!(state.shake > 0.0);
    }

    #[test]
    fn dead_zone_jump_multiplies_force_and_grants_invincibility() {
        let (mut state, config) = playing(3);
        // Drop the player into the bottom band
        state.player.pos.y = LOGICAL_HEIGHT - state.player.size - 1.0;
        let target = state.player.center() + Vec2::new(0.0, 100.0);
        resolve(&mut state, &config, target);

        let expected = config.recoil_force * config.super_jump_multiplier;
        assert!((state.player.vel.y + expected).abs() < 1e-4);
        assert_eq!(
            state.player.invincibility_ticks,
            SUPER_JUMP_INVINCIBILITY_TICKS
        );
        assert_eq!(state.pulses.len(), 1);
        assert!(state.pulses[0].is_super);
        assert_eq!(state.pulses[0].width, state.player.size + PULSE_PAD_SUPER);
        assert_eq!(state.particles.len(), JUMP_PARTICLES_SUPER);
        assert!(state.events.contains(&GameEvent::Jumped { is_super: true }));
    }

    #[test]
    fn disabling_dead_jumps_keeps_bottom_jumps_normal() {
        let (mut state, mut config) = playing(4);
        config.dead_jump_enabled = false;
        state.player.pos.y = LOGICAL_HEIGHT - state.player.size - 1.0;
        let target = state.player.center() + Vec2::new(0.0, 100.0);
        resolve(&mut state, &config, target);

        assert_eq!(state.player.vel.y, -config.recoil_force);
        assert_eq!(state.player.invincibility_ticks, 0);
        assert!(!state.pulses[0].is_super);
    }

    #[test]
    fn jump_above_the_band_is_never_super() {
        let (mut state, config) = playing(5);
        // Default start position sits well above the dead zone
        let target = state.player.center() + Vec2::new(30.0, 100.0);
        resolve(&mut state, &config, target);
        assert_eq!(state.player.invincibility_ticks, 0);
        assert!(!state.pulses[0].is_super);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
