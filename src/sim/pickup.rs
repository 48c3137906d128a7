//! Coins and potions dropped by defeated enemies

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Adds `value` to the score
    Coin,
    /// Heals the player by `value`
    Potion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub rect: Rect,
    pub kind: PickupKind,
    pub value: u32,
    pub collected: bool,
    bob_phase: f32,
    bob_rate: f32,
    bob_amplitude: f32,
}

impl Pickup {
    pub fn new(kind: PickupKind, center: Vec2, tuning: &Tuning) -> Self {
        let value = match kind {
            PickupKind::Coin => tuning.coin_value,
            PickupKind::Potion => tuning.potion_heal,
        };
        Self {
            rect: Rect::from_center(center, tuning.pickup_size, tuning.pickup_size),
            kind,
            value,
            collected: false,
            bob_phase: 0.0,
            bob_rate: tuning.pickup_bob_rate,
            bob_amplitude: tuning.pickup_bob_amplitude,
        }
    }

    pub fn update(&mut self) {
        self.bob_phase = (self.bob_phase + self.bob_rate) % TAU;
    }

    /// Vertical draw offset. Rendering only, the hit rect never moves.
    pub fn bob_offset(&self) -> f32 {
        self.bob_phase.sin() * self.bob_amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_by_kind() {
        let tuning = Tuning::default();
        assert_eq!(Pickup::new(PickupKind::Coin, Vec2::ZERO, &tuning).value, tuning.coin_value);
        assert_eq!(Pickup::new(PickupKind::Potion, Vec2::ZERO, &tuning).value, tuning.potion_heal);
    }

    #[test]
    fn test_bob_does_not_move_rect() {
        let tuning = Tuning::default();
        let mut p = Pickup::new(PickupKind::Coin, Vec2::new(50.0, 50.0), &tuning);
        let rect = p.rect;
        for _ in 0..100 {
            p.update();
            assert!(p.bob_offset().abs() <= tuning.pickup_bob_amplitude);
        }
        assert_eq!(p.rect, rect);
    }
}
