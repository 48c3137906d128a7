//! Eight-way compass directions and their lookup tables
//!
//! Screen coordinates: +x is right, +y is down.

use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Facing / travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Unit step for this direction (diagonals are normalized 45° steps)
    pub fn unit_vector(self) -> Vec2 {
        const D: f32 = FRAC_1_SQRT_2;
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::UpLeft => Vec2::new(-D, -D),
            Direction::UpRight => Vec2::new(D, -D),
            Direction::DownLeft => Vec2::new(-D, D),
            Direction::DownRight => Vec2::new(D, D),
        }
    }

    /// Projectile spawn point relative to the shooter's center.
    /// Tuned against the sprite art, so not symmetric.
    pub fn spawn_offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(6.0, -38.0),
            Direction::Down => Vec2::new(-6.0, 34.0),
            Direction::Left => Vec2::new(-36.0, -4.0),
            Direction::Right => Vec2::new(36.0, -4.0),
            Direction::UpLeft => Vec2::new(-28.0, -30.0),
            Direction::UpRight => Vec2::new(28.0, -30.0),
            Direction::DownLeft => Vec2::new(-28.0, 26.0),
            Direction::DownRight => Vec2::new(28.0, 26.0),
        }
    }

    /// Sprite rotation hint in degrees (counter-clockwise, 0 = right)
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Direction::Right => 0.0,
            Direction::UpRight => 45.0,
            Direction::Up => 90.0,
            Direction::UpLeft => 135.0,
            Direction::Left => 180.0,
            Direction::DownLeft => 225.0,
            Direction::Down => 270.0,
            Direction::DownRight => 315.0,
        }
    }

    /// Collapse diagonals to their first-listed component ("up-right" -> up)
    pub fn primary(self) -> Direction {
        match self {
            Direction::UpLeft | Direction::UpRight => Direction::Up,
            Direction::DownLeft | Direction::DownRight => Direction::Down,
            other => other,
        }
    }

    /// Sprite sheet row for this facing
    pub fn sprite_row(self) -> usize {
        match self.primary() {
            Direction::Left => 1,
            Direction::Right => 2,
            Direction::Up => 3,
            _ => 0,
        }
    }

    /// Quantize a vector to the nearest of the eight directions
    pub fn from_vector(v: Vec2) -> Option<Direction> {
        if v.x == 0.0 && v.y == 0.0 {
            return None;
        }
        let octant = (v.y.atan2(v.x) / FRAC_PI_4).round() as i32;
        Some(match octant.rem_euclid(8) {
            0 => Direction::Right,
            1 => Direction::DownRight,
            2 => Direction::Down,
            3 => Direction::DownLeft,
            4 => Direction::Left,
            5 => Direction::UpLeft,
            6 => Direction::Up,
            _ => Direction::UpRight,
        })
    }

    /// Axis-aligned facing: the dominant axis of `v` wins, vertical on ties
    pub fn dominant_axis(v: Vec2) -> Option<Direction> {
        if v.x == 0.0 && v.y == 0.0 {
            None
        } else if v.x.abs() > v.y.abs() {
            Some(if v.x > 0.0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if v.y > 0.0 { Direction::Down } else { Direction::Up })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_vectors_are_normalized() {
        for dir in Direction::ALL {
            assert!((dir.unit_vector().length() - 1.0).abs() < 1e-5, "{dir:?}");
        }
        assert!((Direction::UpRight.unit_vector().x - 0.7071).abs() < 1e-4);
    }

    #[test]
    fn test_diagonals_collapse_to_vertical() {
        assert_eq!(Direction::UpRight.primary(), Direction::Up);
        assert_eq!(Direction::UpLeft.primary(), Direction::Up);
        assert_eq!(Direction::DownLeft.primary(), Direction::Down);
        assert_eq!(Direction::Left.primary(), Direction::Left);
        assert_eq!(Direction::UpRight.sprite_row(), Direction::Up.sprite_row());
        assert_eq!(Direction::DownLeft.sprite_row(), Direction::Down.sprite_row());
        assert_eq!(Direction::Down.sprite_row(), 0);
        assert_eq!(Direction::Left.sprite_row(), 1);
        assert_eq!(Direction::Right.sprite_row(), 2);
        assert_eq!(Direction::Up.sprite_row(), 3);
    }

    #[test]
    fn test_from_vector_round_trips_unit_vectors() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_vector(dir.unit_vector()), Some(dir));
        }
        assert_eq!(Direction::from_vector(Vec2::ZERO), None);
    }

    #[test]
    fn test_dominant_axis() {
        assert_eq!(Direction::dominant_axis(Vec2::new(-5.0, 2.0)), Some(Direction::Left));
        assert_eq!(Direction::dominant_axis(Vec2::new(1.0, 3.0)), Some(Direction::Down));
        assert_eq!(Direction::dominant_axis(Vec2::new(2.0, -2.0)), Some(Direction::Up));
    }
}
