//! Idle/demo mode
//!
//! A simple pilot that plays the game by synthesizing `TickInput`. While
//! rising it lines up under the lowest reachable platform above; while falling
//! it steers onto the closest platform below. Monsters overhead get shot.

use super::input::TickInput;
use super::state::{GameState, Platform};

/// Horizontal slack before the pilot bothers steering
const STEER_DEADBAND: f32 = 4.0;

/// Produce this frame's input for the autopilot
pub fn drive(state: &GameState) -> TickInput {
    if !state.game_running {
        return TickInput {
            restart: true,
            idle_mode: true,
            ..Default::default()
        };
    }

    let player = &state.player;
    let center_x = player.rect().center().x;
    let feet = player.rect().bottom();

    let above = if player.vel.y < 0.0 {
        let reach = state.tuning.jump_height(player.vel.y);
        state
            .active_platforms()
            .map(|(_, p)| p)
            .filter(|p| p.pos.y < feet && feet - p.pos.y <= reach)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    } else {
        None
    };
    let target = above.or_else(|| nearest_below(state, feet));

    let mut input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    if let Some(platform) = target {
        let dx = platform.rect().center().x - center_x;
        input.left = dx < -STEER_DEADBAND;
        input.right = dx > STEER_DEADBAND;
    }

    // Shoot anything hovering above us
    input.shoot = state.monsters.iter().any(|m| {
        let r = m.rect();
        r.bottom() < player.pos.y && r.left() < center_x && r.right() > center_x
    });

    input
}

/// Closest active platform whose top is at or below the player's feet
fn nearest_below(state: &GameState, feet: f32) -> Option<&Platform> {
    state
        .active_platforms()
        .map(|(_, p)| p)
        .filter(|p| p.pos.y >= feet)
        .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
}
