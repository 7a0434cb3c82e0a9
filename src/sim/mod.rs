//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per call, fixed stage order
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod jump;
pub mod spawn;
pub mod state;
pub mod tick;

pub use state::{
    Enemy, GameEvent, GamePhase, GameState, Particle, ParticleKind, Player, Pulse, Shockwave,
};
pub use tick::{TickInput, tick};
