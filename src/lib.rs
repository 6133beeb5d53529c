//! Doodle Jump - A vertically scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, generation, collisions, camera)
//! - `renderer`: Render consumer turning a game state into screen-space quads

pub mod renderer;
pub mod sim;

/// Game layout constants
pub mod consts {
    /// Viewport dimensions (world units == screen pixels)
    pub const VIEWPORT_WIDTH: f32 = 480.0;
    pub const VIEWPORT_HEIGHT: f32 = 640.0;

    /// Nominal frame duration in milliseconds (dt == 1.0 at this frame time)
    pub const NOMINAL_FRAME_MS: f32 = 16.0;

    /// Player box
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;

    /// Platform box
    pub const PLATFORM_WIDTH: f32 = 80.0;
    pub const PLATFORM_HEIGHT: f32 = 15.0;

    /// Monster box
    pub const MONSTER_WIDTH: f32 = 40.0;
    pub const MONSTER_HEIGHT: f32 = 30.0;

    /// Projectile box
    pub const PROJECTILE_WIDTH: f32 = 6.0;
    pub const PROJECTILE_HEIGHT: f32 = 12.0;

    /// Entity store capacities
    pub const MAX_PLATFORMS: usize = 100;
    pub const MAX_MONSTERS: usize = 20;
    pub const MAX_PROJECTILES: usize = 10;

    /// Anchor platform sits this far above the bottom of the initial viewport
    pub const ANCHOR_BOTTOM_OFFSET: f32 = 50.0;
    /// Player spawns with its top this far above the bottom of the viewport
    pub const PLAYER_SPAWN_BOTTOM_OFFSET: f32 = 100.0;
}

/// Wrap a horizontal position around the viewport edges.
///
/// An entity whose right edge leaves the left side reappears flush with the
/// right side, and one whose left edge passes the right side reappears just
/// off the left side.
#[inline]
pub fn wrap_x(x: f32, width: f32) -> f32 {
    use consts::VIEWPORT_WIDTH;
    if x + width < 0.0 {
        VIEWPORT_WIDTH
    } else if x > VIEWPORT_WIDTH {
        -width
    } else {
        x
    }
}
