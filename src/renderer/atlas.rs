//! Sprite atlas lookup
//!
//! Image decoding and GPU upload belong to the host. This only maps sprites to
//! regions of an already-loaded sheet; any sprite without a region is drawn as
//! a flat-colored rectangle instead.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Everything the game can draw as a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Player,
    PlayerShooting,
    PlatformNormal,
    PlatformMoving,
    PlatformBreakable,
    PlatformSpring,
    Monster,
    Projectile,
}

/// Normalized texture rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    /// Mirror horizontally (for a left-facing player)
    pub fn flipped_x(self) -> Self {
        Self {
            u0: self.u1,
            u1: self.u0,
            ..self
        }
    }
}

/// Sprite regions within one sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteAtlas {
    regions: HashMap<Sprite, UvRect>,
}

impl SpriteAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slice a sheet laid out as a uniform `cols` x `rows` grid
    pub fn from_grid(cols: u32, rows: u32, cells: &[(Sprite, u32, u32)]) -> Self {
        let mut atlas = Self::new();
        if cols == 0 || rows == 0 {
            log::warn!("Sprite sheet grid is empty - using flat colors");
            return atlas;
        }
        let cw = 1.0 / cols as f32;
        let ch = 1.0 / rows as f32;
        for &(sprite, col, row) in cells {
            if col >= cols || row >= rows {
                log::warn!("Sprite {sprite:?} cell ({col}, {row}) is outside the sheet");
                continue;
            }
            atlas.insert(
                sprite,
                UvRect {
                    u0: col as f32 * cw,
                    v0: row as f32 * ch,
                    u1: (col + 1) as f32 * cw,
                    v1: (row + 1) as f32 * ch,
                },
            );
        }
        atlas
    }

    pub fn insert(&mut self, sprite: Sprite, region: UvRect) {
        self.regions.insert(sprite, region);
    }

    pub fn region(&self, sprite: Sprite) -> Option<UvRect> {
        self.regions.get(&sprite).copied()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
