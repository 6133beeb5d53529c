//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod generate;
pub mod input;
pub mod rect;
pub mod state;
pub mod tick;
pub mod tuning;

pub use collision::{Landing, lands_on};
pub use input::{TickInput, tilt_to_velocity};
pub use rect::Rect;
pub use state::{
    GameEvent, GameState, Monster, MonsterKind, Platform, PlatformKind, Player, Projectile,
    frame_dt,
};
pub use tick::{tick, try_shoot};
pub use tuning::Tuning;
