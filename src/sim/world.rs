//! Bounded play area

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Background tiling descriptor. Opaque to the simulation, only the renderer reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundTile {
    pub image: String,
    pub tile_size: u32,
}

impl Default for BackgroundTile {
    fn default() -> Self {
        Self {
            image: "background.png".to_string(),
            tile_size: 256,
        }
    }
}

/// Fixed-size world plane, independent of the viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    width: f32,
    height: f32,
    pub background: BackgroundTile,
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            width,
            height,
            background: BackgroundTile::default(),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
