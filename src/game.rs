//! Session facade
//!
//! `Game` owns the simulation state plus the process-lifetime best score
//! and exposes the two entry points a host loop needs: `advance` once per
//! frame, `snapshot` whenever it draws.

use serde::Serialize;

use crate::config::{Config, ConfigError};
use crate::sim::state::{
    Enemy, GameEvent, GamePhase, GameState, Particle, Player, Pulse, Shockwave,
};
use crate::sim::tick::{TickInput, tick};

/// One running game session
#[derive(Debug)]
pub struct Game {
    state: GameState,
    high_score: u64,
}

/// Read-only per-tick view for the rendering collaborator
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    /// Camera-shake intensity, 0..=1
    pub shake: f32,
    pub fuel: f32,
    pub max_fuel: f32,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub particles: &'a [Particle],
    pub pulses: &'a [Pulse],
    pub shockwaves: &'a [Shockwave],
}

impl Game {
    /// Start a session. The seed fixes the whole run's randomness, so the
    /// same seed and inputs replay the same game.
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            high_score: 0,
        }
    }

    /// Advance one tick
    ///
    /// The config is validated before it can touch the simulation; a bad
    /// value returns the error and leaves the state untouched. On success
    /// the returned events cover everything that happened this tick.
    pub fn advance(
        &mut self,
        config: &Config,
        input: &TickInput,
        dt: f32,
    ) -> Result<&[GameEvent], ConfigError> {
        config.validate()?;
        tick(&mut self.state, config, input, dt);
        self.high_score = self.high_score.max(self.state.score());
        Ok(&self.state.events)
    }

    /// Immutable view of everything the renderer needs
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.state.phase,
            score: self.state.score(),
            high_score: self.high_score,
            shake: self.state.shake,
            fuel: self.state.player.fuel,
            max_fuel: self.state.player.max_fuel,
            player: &self.state.player,
            enemies: &self.state.enemies,
            particles: &self.state.particles,
            pulses: &self.state.pulses,
            shockwaves: &self.state.shockwaves,
        }
    }

    /// Best score seen by this `Game` value, across restarts
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Direct state access for hosts that need more than the snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(game: &mut Game, config: &Config) {
        let input = TickInput {
            interact: true,
            ..Default::default()
        };
        game.advance(config, &input, 1.0).unwrap();
    }

    #[test]
    fn invalid_config_fails_before_touching_the_state() {
        let mut game = Game::new(1);
        let config = Config {
            gravity: f32::NAN,
            ..Config::default()
        };
        let input = TickInput {
            interact: true,
            ..Default::default()
        };
        assert!(game.advance(&config, &input, 1.0).is_err());
        assert_eq!(game.snapshot().phase, GamePhase::Start);
    }

    #[test]
    fn snapshot_mirrors_the_simulation() {
        let config = Config::default();
        let mut game = Game::new(2);
        start(&mut game, &config);

        let snap = game.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.fuel, snap.max_fuel);
        assert_eq!(snap.player.size, config.player_size);
    }

    #[test]
    fn snapshot_serializes_for_host_consumption() {
        let config = Config::default();
        let mut game = Game::new(3);
        start(&mut game, &config);
        game.advance(&config, &TickInput::default(), 1.0).unwrap();

        let json = serde_json::to_string(&game.snapshot()).expect("snapshot json");
        assert!(json.contains("\"phase\""));
        assert!(json.contains("\"enemies\""));
    }

    #[test]
    fn high_score_tracks_the_best_run() {
        let quiet = Config {
            gravity: 0.0,
            enemy_spawn_rate: 0.0,
            spawn_curve: vec![0.0, 0.0],
            ..Config::default()
        };
        let mut game = Game::new(4);
        start(&mut game, &quiet);
        for _ in 0..120 {
            game.advance(&quiet, &TickInput::default(), 1.0).unwrap();
        }
        assert_eq!(game.snapshot().score, 20);
        assert_eq!(game.high_score(), 20);

        // Default gravity drags the idle player off the bottom
        let falling = Config::default();
        let mut over = false;
        for _ in 0..2000 {
            let events = game.advance(&falling, &TickInput::default(), 1.0).unwrap();
            if events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
            {
                over = true;
                break;
            }
        }
        assert!(over);

        start(&mut game, &quiet);
        assert_eq!(game.snapshot().score, 0);
        assert_eq!(game.high_score(), 20);
    }
}
