//! Elimination rules and lethal contact
//!
//! Two channels kill enemies: the one-shot pulse band fired at jump time
//! and the every-tick shockwave radius checks. Both funnel through the
//! same kill handler, so any kill refills fuel, flashes the player and,
//! when burning is enabled, chains a new shockwave. The lethal
//! player-enemy contact check lives here too.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Particle, ParticleKind, Pulse, Shockwave};
use crate::config::Config;
use crate::consts::*;

/// One-shot elimination pass for a freshly fired pulse
///
/// Normal jumps clear the band below the player's center, super jumps the
/// band above it. Runs before the pulse is stored, so each pulse kills at
/// most once.
pub fn pulse_pass(state: &mut GameState, config: &Config, pulse: &Pulse) {
    let center_y = state.player.center().y;
    let half_width = pulse.width / 2.0;
    let burst = if pulse.is_super {
        KILL_PARTICLES_SUPER
    } else {
        KILL_PARTICLES_NORMAL
    };

    let victims: Vec<usize> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, enemy)| {
            if enemy.dead {
                return false;
            }
            let in_band = (enemy.pos.x - pulse.pos.x).abs() < enemy.radius + half_width;
            let on_kill_side = if pulse.is_super {
                enemy.pos.y < center_y
            } else {
                enemy.pos.y > center_y
            };
            in_band && on_kill_side
        })
        .map(|(i, _)| i)
        .collect();

    for index in victims {
        kill_enemy(state, config, index, config.burning_radius, burst);
    }
}

/// Every-tick shockwave eliminations
///
/// Kills push chained waves into `state.shockwaves` mid-pass, so the pass
/// iterates a snapshot of the radii that were active when it started.
/// Fresh chains have radius zero and start eliminating next tick.
pub fn shockwave_pass(state: &mut GameState, config: &Config) {
    let active: Vec<(Vec2, f32, f32)> = state
        .shockwaves
        .iter()
        .filter(|wave| wave.life > 0.0)
        .map(|wave| (wave.pos, wave.radius, wave.max_radius))
        .collect();

    for (pos, radius, max_radius) in active {
        let victims: Vec<usize> = state
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, enemy)| {
                !enemy.dead && enemy.pos.distance(pos) < radius + enemy.radius
            })
            .map(|(i, _)| i)
            .collect();
        for index in victims {
            kill_enemy(
                state,
                config,
                index,
                max_radius * SHOCKWAVE_CHAIN_SCALE,
                KILL_PARTICLES_NORMAL,
            );
        }
    }
}

/// Lethal player-enemy contact: one touch ends the run
pub fn contact_pass(state: &mut GameState) {
    if state.player.is_invincible() {
        return;
    }
    let center = state.player.center();
    let half_size = state.player.size / 2.0;
    let hit = state
        .enemies
        .iter()
        .find(|enemy| {
            !enemy.dead
                && enemy.pos.distance(center) < enemy.radius + half_size - CONTACT_SLACK
        })
        .map(|enemy| enemy.id);

    if let Some(id) = hit {
        log::debug!("lethal contact with enemy {id}");
        state.game_over("contact");
    }
}

/// Shared kill handler. Every elimination refills fuel, flashes the
/// player, bursts particles at the victim and, if burning is enabled,
/// anchors a new shockwave on the player.
fn kill_enemy(state: &mut GameState, config: &Config, index: usize, wave_radius: f32, burst: usize) {
    let (id, pos) = {
        let enemy = &mut state.enemies[index];
        if enemy.dead {
            return;
        }
        enemy.dead = true;
        (enemy.id, enemy.pos)
    };

    state.player.fuel = state.player.max_fuel;
    state.player.flash_ticks = KILL_FLASH_TICKS;
    state.events.push(GameEvent::EnemyKilled { id });

    spawn_kill_burst(state, pos, burst);

    if config.burning_enabled {
        let wave_id = state.next_entity_id();
        state.shockwaves.push(Shockwave {
            id: wave_id,
            pos: state.player.center(),
            radius: 0.0,
            max_radius: wave_radius,
            life: config.burning_duration,
            max_life: config.burning_duration,
        });
        state.events.push(GameEvent::ShockwaveSpawned { id: wave_id });
    }
}

/// Radial particle burst at a victim's position
fn spawn_kill_burst(state: &mut GameState, pos: Vec2, count: usize) {
    for _ in 0..count {
        let angle = state.rng.random_range(0.0..std::f32::consts::TAU);
        let speed = state.rng.random_range(0.5..4.0);
        let life = state.rng.random_range(15.0..35.0);
        state.push_particle(Particle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life,
            max_life: life,
            kind: ParticleKind::Kill,
        });
    }
}
