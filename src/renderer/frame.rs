//! Render snapshot
//!
//! Reads a `GameState` and emits screen-space quads. World to screen is a pure
//! vertical shift by the camera: `screen_y = world_y - camera_y`, x unchanged.
//! Entities fully outside the viewport are skipped but still simulated.

use super::atlas::{Sprite, SpriteAtlas};
use super::shapes::{quad, textured_quad};
use super::vertex::{Vertex, colors};
use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::sim::camera::to_screen_y;
use crate::sim::{GameState, PlatformKind, Rect};

/// Vertices for one frame plus draw statistics
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    /// Entity quads emitted (background and HUD excluded)
    pub drawn: usize,
    /// Entities skipped as off-screen
    pub skipped: usize,
}

/// Whether a box at `screen_y` with `height` can touch the viewport
#[inline]
pub fn is_visible(screen_y: f32, height: f32) -> bool {
    screen_y > -height && screen_y < VIEWPORT_HEIGHT + height
}

/// World rect to screen rect
pub fn to_screen(rect: &Rect, camera_y: f32) -> Rect {
    let mut screen = *rect;
    screen.pos.y = to_screen_y(rect.pos.y, camera_y);
    screen
}

struct Painter<'a> {
    frame: Frame,
    atlas: Option<&'a SpriteAtlas>,
    camera_y: f32,
}

impl Painter<'_> {
    fn entity(&mut self, world: &Rect, sprite: Sprite, fallback: [f32; 4], flip: bool) {
        let screen = to_screen(world, self.camera_y);
        if !is_visible(screen.top(), screen.size.y) {
            self.frame.skipped += 1;
            return;
        }
        let region = self.atlas.and_then(|a| a.region(sprite));
        match region {
            Some(uv) => {
                let uv = if flip { uv.flipped_x() } else { uv };
                self.frame.vertices.extend(textured_quad(&screen, uv));
            }
            None => self.frame.vertices.extend(quad(&screen, fallback)),
        }
        self.frame.drawn += 1;
    }

    fn overlay(&mut self, rect: Rect, color: [f32; 4]) {
        self.frame.vertices.extend(quad(&rect, color));
    }
}

fn platform_look(kind: PlatformKind) -> (Sprite, [f32; 4]) {
    match kind {
        PlatformKind::Normal => (Sprite::PlatformNormal, colors::PLATFORM_NORMAL),
        PlatformKind::Moving => (Sprite::PlatformMoving, colors::PLATFORM_MOVING),
        PlatformKind::Breakable => (Sprite::PlatformBreakable, colors::PLATFORM_BREAKABLE),
        PlatformKind::Spring => (Sprite::PlatformSpring, colors::PLATFORM_SPRING),
    }
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState, atlas: Option<&SpriteAtlas>) -> Frame {
    let mut painter = Painter {
        frame: Frame::default(),
        atlas,
        camera_y: state.camera_y,
    };

    painter.overlay(Rect::new(0.0, 0.0, VIEWPORT_WIDTH, VIEWPORT_HEIGHT), colors::SKY);

    for (_, platform) in state.active_platforms() {
        let (sprite, color) = platform_look(platform.kind);
        painter.entity(&platform.rect(), sprite, color, false);
    }
    for monster in &state.monsters {
        painter.entity(&monster.rect(), Sprite::Monster, colors::MONSTER, monster.move_direction < 0.0);
    }
    for projectile in &state.projectiles {
        painter.entity(&projectile.rect(), Sprite::Projectile, colors::PROJECTILE, false);
    }

    let player = &state.player;
    let (sprite, color) = if player.is_shooting {
        (Sprite::PlayerShooting, colors::PLAYER_SHOOTING)
    } else {
        (Sprite::Player, colors::PLAYER)
    };
    painter.entity(&player.rect(), sprite, color, player.facing < 0.0);

    // Score ticks: one per 10 points, capped at 50
    let ticks = (state.score / 10).min(50);
    for i in 0..ticks {
        painter.overlay(Rect::new(10.0 + i as f32 * 2.0, 10.0, 1.0, 10.0), colors::SCORE);
    }

    if !state.game_running {
        painter.overlay(
            Rect::new(
                VIEWPORT_WIDTH / 4.0,
                VIEWPORT_HEIGHT / 2.0 - 50.0,
                VIEWPORT_WIDTH / 2.0,
                100.0,
            ),
            colors::GAME_OVER,
        );
    }

    painter.frame
}
