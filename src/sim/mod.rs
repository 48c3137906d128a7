//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, fixed stage order
//! - Randomness only through the injected RNG
//! - No rendering, audio playback, or device input

pub mod camera;
pub mod collision;
pub mod direction;
pub mod enemy;
pub mod pickup;
pub mod player;
pub mod projectile;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::Camera;
pub use collision::resolve_collisions;
pub use direction::Direction;
pub use enemy::Enemy;
pub use pickup::{Pickup, PickupKind};
pub use player::{Player, PlayerStep, Sprint, SprintState};
pub use projectile::{Owner, Projectile, SPIT_TINT};
pub use rect::Rect;
pub use spawner::{Edge, Spawner};
pub use state::{DeathSequence, GameEvent, GamePhase, GameState};
pub use tick::{AudioStatus, SilentAudio, TickInput, tick};
pub use world::{BackgroundTile, World};
