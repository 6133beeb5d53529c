//! Input interpretation
//!
//! Turns abstract held-key state or a tilt reading into a target horizontal
//! velocity, then eases the player toward it. Raw event capture lives in the
//! host; it only fills in a `TickInput`.

use serde::{Deserialize, Serialize};

use super::state::Player;
use super::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    /// Only honored after game over
    pub restart: bool,
    /// Device tilt in degrees, [0, 360)
    pub tilt_deg: Option<f32>,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

impl TickInput {
    /// Target horizontal velocity. Keys win over tilt; right wins over left.
    pub fn target_velocity(&self, tuning: &Tuning) -> f32 {
        if self.right {
            tuning.player_speed
        } else if self.left {
            -tuning.player_speed
        } else if let Some(angle) = self.tilt_deg {
            tilt_to_velocity(angle, tuning.player_speed, tuning.tilt_deadzone_deg)
        } else {
            0.0
        }
    }
}

/// Map a tilt angle onto [-max_speed, max_speed].
///
/// - [0, 45]: right tilt ramps 0 -> +max
/// - [315, 360): left tilt ramps 0 -> -max toward 315
/// - [135, 225]: upside-down left tilt, ramping to -max at 180
///
/// The first `deadzone` degrees of every ramp produce nothing; all other
/// angles produce nothing.
pub fn tilt_to_velocity(angle_deg: f32, max_speed: f32, deadzone: f32) -> f32 {
    const WINDOW: f32 = 45.0;
    let angle = angle_deg.rem_euclid(360.0);
    let ramp = |deflection: f32| -> f32 {
        if deflection <= deadzone {
            0.0
        } else {
            ((deflection - deadzone) / (WINDOW - deadzone)).min(1.0)
        }
    };

    if angle <= WINDOW {
        max_speed * ramp(angle)
    } else if angle >= 360.0 - WINDOW {
        -max_speed * ramp(360.0 - angle)
    } else if (180.0 - WINDOW..=180.0 + WINDOW).contains(&angle) {
        -max_speed * ramp(WINDOW - (angle - 180.0).abs())
    } else {
        0.0
    }
}

/// Ease horizontal velocity toward `target`, or apply friction when idle
pub fn apply_horizontal(player: &mut Player, target: f32, tuning: &Tuning, dt: f32) {
    if target != 0.0 {
        let blend = (tuning.acceleration * dt).min(1.0);
        player.vel.x += (target - player.vel.x) * blend;
        player.facing = target.signum();
    } else {
        player.vel.x *= tuning.friction;
    }
}
