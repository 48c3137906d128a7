//! Axis-aligned rectangle geometry
//!
//! Positions are top-left based with y growing downward, matching the
//! surface coordinates of the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w >= 0.0 && h >= 0.0, "rect size must be non-negative");
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w / 2.0;
        self.y = center.y - self.h / 2.0;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Strict overlap test (touching edges do not overlap)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Shrink by `margin` on every side, keeping the center fixed
    pub fn inset(&self, margin: f32) -> Rect {
        let w = (self.w - margin * 2.0).max(0.0);
        let h = (self.h - margin * 2.0).max(0.0);
        Rect::from_center(self.center(), w, h)
    }

    /// Move this rect so it lies inside `bounds` (clamp, no resize)
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.x = self.x.clamp(bounds.left(), (bounds.right() - self.w).max(bounds.left()));
        self.y = self.y.clamp(bounds.top(), (bounds.bottom() - self.h).max(bounds.top()));
    }
}
