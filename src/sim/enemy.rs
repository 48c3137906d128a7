//! Pursuing enemies

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::rect::Rect;
use crate::consts::ANIM_FRAMES;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: f32,
    /// Axis-aligned only
    pub facing: Direction,
    /// Animation phase in [0, ANIM_FRAMES)
    pub phase: f32,
    shoot_delay: u32,
    shoot_timer: u32,
    hitbox_inset: f32,
    anim_rate: f32,
}

impl Enemy {
    /// New enemy with its top-left corner at `pos`.
    /// Shoot delay and starting timer are drawn once per instance.
    pub fn new<R: Rng + ?Sized>(pos: Vec2, tuning: &Tuning, rng: &mut R) -> Self {
        let shoot_delay = rng.random_range(tuning.shoot_delay_min..tuning.shoot_delay_max);
        let shoot_timer = rng.random_range(0..shoot_delay);
        Self {
            rect: Rect::new(pos.x, pos.y, tuning.enemy_size, tuning.enemy_size),
            speed: tuning.enemy_speed,
            facing: Direction::Down,
            phase: 0.0,
            shoot_delay,
            shoot_timer,
            hitbox_inset: tuning.enemy_hitbox_inset,
            anim_rate: tuning.enemy_anim_rate,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn hitbox(&self) -> Rect {
        self.rect.inset(self.hitbox_inset)
    }

    pub fn shoot_delay(&self) -> u32 {
        self.shoot_delay
    }

    /// Step toward `target`.
    ///
    /// The displacement is normalized by Chebyshev distance, so the larger
    /// axis always moves exactly `speed` regardless of approach angle.
    pub fn update(&mut self, target: Vec2) {
        let delta = target - self.center();
        let dist = delta.x.abs().max(delta.y.abs());
        if dist > 0.0 {
            self.rect.translate(delta / dist * self.speed);
        }

        if let Some(facing) = Direction::dominant_axis(target - self.center()) {
            self.facing = facing;
        }

        self.phase = (self.phase + self.anim_rate) % ANIM_FRAMES as f32;
    }

    /// Advance the shoot timer. True on the tick the delay elapses.
    pub fn can_shoot(&mut self) -> bool {
        self.shoot_timer += 1;
        if self.shoot_timer >= self.shoot_delay {
            self.shoot_timer = 0;
            true
        } else {
            false
        }
    }

    pub fn sprite_cell(&self) -> (usize, usize) {
        (self.facing.sprite_row(), self.phase as usize % ANIM_FRAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy_at(center: Vec2) -> Enemy {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut e = Enemy::new(Vec2::ZERO, &tuning, &mut rng);
        e.rect.set_center(center);
        e
    }

    #[test]
    fn test_axis_aligned_pursuit() {
        let mut e = enemy_at(Vec2::new(100.0, 100.0));
        e.update(Vec2::new(300.0, 100.0));
        assert_eq!(e.center(), Vec2::new(100.0 + e.speed, 100.0));
        assert_eq!(e.facing, Direction::Right);
    }

    #[test]
    fn test_diagonal_pursuit_moves_speed_on_both_axes() {
        let mut e = enemy_at(Vec2::new(100.0, 100.0));
        e.update(Vec2::new(0.0, 0.0));
        let delta = e.center() - Vec2::new(100.0, 100.0);
        assert!((delta.x + e.speed).abs() < 1e-4);
        assert!((delta.y + e.speed).abs() < 1e-4);
    }

    #[test]
    fn test_pursuit_at_target_stays_put() {
        let mut e = enemy_at(Vec2::new(50.0, 50.0));
        e.update(Vec2::new(50.0, 50.0));
        assert_eq!(e.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_facing_vertical_when_dominant() {
        let mut e = enemy_at(Vec2::new(100.0, 100.0));
        e.update(Vec2::new(110.0, 400.0));
        assert_eq!(e.facing, Direction::Down);
    }

    #[test]
    fn test_animation_phase_wraps() {
        let mut e = enemy_at(Vec2::new(100.0, 100.0));
        for _ in 0..200 {
            e.update(Vec2::new(100.0, 100.0));
            assert!(e.phase >= 0.0 && e.phase < ANIM_FRAMES as f32);
        }
    }

    #[test]
    fn test_shoot_delay_in_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            let e = Enemy::new(Vec2::ZERO, &tuning, &mut rng);
            assert!((tuning.shoot_delay_min..tuning.shoot_delay_max).contains(&e.shoot_delay()));
        }
    }

    #[test]
    fn test_can_shoot_fires_once_per_delay() {
        let mut e = enemy_at(Vec2::ZERO);
        // Within any window of `delay` ticks exactly one shot fires
        let delay = e.shoot_delay() as usize;
        let first = (0..delay).filter(|_| e.can_shoot()).count();
        assert_eq!(first, 1);
        let shots = (0..delay * 3).filter(|_| e.can_shoot()).count();
        assert_eq!(shots, 3);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn chebyshev_step_equals_speed(
                ex in -500.0f32..500.0, ey in -500.0f32..500.0,
                tx in -500.0f32..500.0, ty in -500.0f32..500.0,
            ) {
                let start = Vec2::new(ex, ey);
                let target = Vec2::new(tx, ty);
                prop_assume!(start.distance(target) > 0.01);
                let mut e = enemy_at(start);
                let before = e.center();
                e.update(target);
                let step = e.center() - before;
                prop_assert!((step.x.abs().max(step.y.abs()) - e.speed).abs() < 1e-3);
            }
        }
    }
}
