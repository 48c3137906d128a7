//! Projectiles fired by the player or spat by enemies
//!
//! Both owners share motion and expiry; the owner only changes which list the
//! projectile lives in and how it is tinted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::rect::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// RGB tint applied to enemy spit sprites
pub const SPIT_TINT: [u8; 3] = [120, 210, 90];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub owner: Owner,
    pub direction: Direction,
    pub speed: f32,
    /// Sprite rotation fixed at creation (degrees)
    pub rotation: f32,
}

impl Projectile {
    /// Spawn at the shooter's center plus the direction's fixed offset
    pub fn spawn(owner: Owner, origin: Vec2, direction: Direction, tuning: &Tuning) -> Self {
        let size = tuning.projectile_size;
        Self {
            rect: Rect::from_center(origin + direction.spawn_offset(), size, size),
            owner,
            direction,
            speed: tuning.projectile_speed,
            rotation: direction.rotation_degrees(),
        }
    }

    pub fn update(&mut self) {
        self.rect.translate(self.direction.unit_vector() * self.speed);
    }

    /// True once the rect no longer overlaps the world at all
    pub fn is_expired(&self, bounds: &Rect) -> bool {
        !self.rect.overlaps(bounds)
    }

    pub fn tint(&self) -> Option<[u8; 3]> {
        match self.owner {
            Owner::Player => None,
            Owner::Enemy => Some(SPIT_TINT),
        }
    }
}
