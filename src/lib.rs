//! Llama Spitter - A top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, session state)
//! - `audio`: Headless audio collaborator (event to sound mapping, busy tracking)
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;

    /// Viewport dimensions (logical units)
    pub const VIEW_WIDTH: f32 = 609.0;
    pub const VIEW_HEIGHT: f32 = 791.0;

    /// Sprite sheet columns per animation row
    pub const ANIM_FRAMES: usize = 4;
}
