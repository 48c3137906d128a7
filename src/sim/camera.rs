//! Viewport camera
//!
//! Follows the player center and stays clamped inside the world, so the
//! renderer never shows anything past the world edges.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World-space offset of the viewport's top-left corner
    pub x: f32,
    pub y: f32,
    pub view_width: f32,
    pub view_height: f32,
}

impl Camera {
    pub fn new(view_width: f32, view_height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            view_width,
            view_height,
        }
    }

    /// Center the view on `target`, clamped to `0..=world - view` on each axis
    pub fn follow(&mut self, target: Vec2, world: &World) {
        let max_x = (world.width() - self.view_width).max(0.0);
        let max_y = (world.height() - self.view_height).max(0.0);
        self.x = (target.x - self.view_width / 2.0).clamp(0.0, max_x);
        self.y = (target.y - self.view_height / 2.0).clamp(0.0, max_y);
    }

    /// Visible region in world coordinates
    pub fn viewport(&self) -> Rect {
        Rect::new(self.x, self.y, self.view_width, self.view_height)
    }

    pub fn is_visible(&self, rect: &Rect) -> bool {
        self.viewport().overlaps(rect)
    }

    pub fn to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos - Vec2::new(self.x, self.y)
    }

    /// Translate a world-space rect into viewport coordinates
    pub fn apply(&self, rect: &Rect) -> Rect {
        Rect::new(rect.x - self.x, rect.y - self.y, rect.w, rect.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(1800.0, 1800.0)
    }

    #[test]
    fn test_follow_centers_on_target() {
        let mut cam = Camera::new(600.0, 800.0);
        cam.follow(Vec2::new(900.0, 900.0), &world());
        assert_eq!((cam.x, cam.y), (600.0, 500.0));
    }

    #[test]
    fn test_follow_clamps_to_world() {
        let mut cam = Camera::new(600.0, 800.0);
        cam.follow(Vec2::new(10.0, 10.0), &world());
        assert_eq!((cam.x, cam.y), (0.0, 0.0));

        cam.follow(Vec2::new(1790.0, 1790.0), &world());
        assert_eq!((cam.x, cam.y), (1200.0, 1000.0));
    }

    #[test]
    fn test_visibility() {
        let mut cam = Camera::new(600.0, 800.0);
        cam.follow(Vec2::new(900.0, 900.0), &world());
        assert!(cam.is_visible(&Rect::new(900.0, 900.0, 10.0, 10.0)));
        assert!(!cam.is_visible(&Rect::new(0.0, 0.0, 50.0, 50.0)));
        assert_eq!(cam.to_screen(Vec2::new(600.0, 500.0)), Vec2::ZERO);
        assert_eq!(cam.apply(&Rect::new(610.0, 520.0, 4.0, 4.0)).x, 10.0);
    }
}
