//! One-way scrolling camera and height-based score

use super::state::GameState;
use crate::consts::VIEWPORT_HEIGHT;

/// Move the camera up to follow the player. It never moves down.
pub fn update_camera(state: &mut GameState) {
    let target = state.player.pos.y - VIEWPORT_HEIGHT / 2.0 + state.tuning.camera_offset;
    if target < state.camera_y {
        state.camera_y = target;
    }
}

/// Score is the best height reached, in tens of units
pub fn update_score(state: &mut GameState) {
    let height = (-state.camera_y / 10.0).floor();
    if height > 0.0 {
        state.score = state.score.max(height as u64);
    }
}

/// The player has dropped out through the bottom of the viewport
pub fn player_fell(state: &GameState) -> bool {
    state.player.pos.y >= state.viewport_bottom()
}

/// Screen-space y for a world y
#[inline]
pub fn to_screen_y(world_y: f32, camera_y: f32) -> f32 {
    world_y - camera_y
}
