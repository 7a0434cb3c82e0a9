//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one owned `GameState`
//! aggregate. Collaborators only ever receive borrowed views of it, so
//! there is exactly one copy of the truth per session.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, waiting for the first interaction
    Start,
    /// Active gameplay
    Playing,
    /// Run ended; simulation frozen until a restart interaction
    GameOver,
}

/// Discrete things that happened during one tick
///
/// Consumed by the audio layer for cue triggers and by the host for UI
/// transitions. The buffer is rebuilt every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A jump impulse was applied
    Jumped { is_super: bool },
    /// A jump was attempted without enough fuel
    JumpRejected,
    /// An enemy was eliminated
    EnemyKilled { id: u64 },
    /// A shockwave was created, primary or chained
    ShockwaveSpawned { id: u64 },
    /// The run ended
    GameOver { score: u64 },
}

/// The player body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in logical space
    pub pos: Vec2,
    /// Edge length, taken from config at reset
    pub size: f32,
    pub vel: Vec2,
    pub fuel: f32,
    pub max_fuel: f32,
    /// Kill flash countdown for the renderer
    pub flash_ticks: u32,
    /// Remaining contact-immunity window
    pub invincibility_ticks: u32,
}

impl Player {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::new(
                (LOGICAL_WIDTH - size) / 2.0,
                LOGICAL_HEIGHT * PLAYER_START_Y_FRAC,
            ),
            size,
            vel: Vec2::ZERO,
            fuel: MAX_FUEL,
            max_fuel: MAX_FUEL,
            flash_ticks: 0,
            invincibility_ticks: 0,
        }
    }

    /// Center of the body
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Lowest edge; the dead-zone test uses this
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility_ticks > 0
    }
}

/// A falling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u64,
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Fall speed, fixed at spawn
    pub speed: f32,
    /// Set by an elimination; pruned at end of tick
    pub dead: bool,
}

/// Color family for a cosmetic particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Jump,
    SuperJump,
    Kill,
}

/// A cosmetic particle: no collision, light gravity, finite life
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in ticks
    pub life: f32,
    pub max_life: f32,
    pub kind: ParticleKind,
}

/// The momentary recoil beam created by a jump
///
/// Its elimination pass runs exactly once, when the jump executes. After
/// that the pulse only counts down so the renderer can fade it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pulse {
    /// The player's center at jump time
    pub pos: Vec2,
    pub width: f32,
    pub life: f32,
    pub max_life: f32,
    pub is_super: bool,
}

/// A player-anchored expanding elimination radius
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shockwave {
    pub id: u64,
    /// Recentered on the player every tick
    pub pos: Vec2,
    /// Refreshed from the eased life curve each tick
    pub radius: f32,
    pub max_radius: f32,
    /// Remaining life in ticks
    pub life: f32,
    pub max_life: f32,
}

impl Shockwave {
    /// Eased growth: zero at birth, peak at half life, shrinking at expiry
    pub fn current_radius(&self) -> f32 {
        let progress = 1.0 - (self.life / self.max_life).clamp(0.0, 1.0);
        self.max_radius * (std::f32::consts::PI * progress).sin()
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Ticks elapsed in the current run; stops counting at game over
    pub ticks: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Visual particles, not gameplay-affecting
    pub particles: Vec<Particle>,
    pub pulses: Vec<Pulse>,
    pub shockwaves: Vec<Shockwave>,
    /// Camera-shake intensity for the renderer, 0..=1
    pub shake: f32,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    /// Next entity ID
    next_id: u64,
}

impl GameState {
    /// Create a fresh session in the `Start` phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Start,
            ticks: 0,
            player: Player::new(DEFAULT_PLAYER_SIZE),
            enemies: Vec::new(),
            particles: Vec::new(),
            pulses: Vec::new(),
            shockwaves: Vec::new(),
            shake: 0.0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID, shared across all entity kinds
    pub fn next_entity_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Score accrues 10 points per fully survived second
    pub fn score(&self) -> u64 {
        (self.ticks / TICKS_PER_SECOND as u64) * SCORE_PER_SECOND
    }

    /// Seconds elapsed in the current run
    pub fn seconds(&self) -> f32 {
        self.ticks as f32 / TICKS_PER_SECOND as f32
    }

    /// Full reset into `Playing`: fresh player at the start position,
    /// cleared collections, zeroed timers and score. The RNG keeps its
    /// stream so restarts do not replay the previous run.
    pub fn reset(&mut self, config: &Config) {
        self.player = Player::new(config.player_size);
        self.enemies.clear();
        self.particles.clear();
        self.pulses.clear();
        self.shockwaves.clear();
        self.shake = 0.0;
        self.ticks = 0;
        self.phase = GamePhase::Playing;
    }

    /// Freeze the run and record the final score
    pub fn game_over(&mut self, reason: &str) {
        let score = self.score();
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score });
        log::info!("game over ({reason}): score {score}");
    }

    /// Push a particle, evicting the oldest when the cosmetic cap is hit
    pub fn push_particle(&mut self, particle: Particle) {
        if self.particles.len() >= MAX_PARTICLES {
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }
}
