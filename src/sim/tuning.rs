//! Data-driven game balance
//!
//! Every physics and difficulty knob lives here so tests and alternate builds
//! can swap them without touching the simulation. Velocities are expressed in
//! world units per nominal frame, accelerations per nominal frame squared.

use serde::{Deserialize, Serialize};

/// Tuning constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    // === Player physics ===
    /// Downward acceleration applied every frame
    pub gravity: f32,
    /// Vertical velocity after landing on a normal platform (negative = up)
    pub jump_force: f32,
    /// Jump impulse multiplier for moving platforms
    pub moving_jump_multiplier: f32,
    /// Vertical velocity after landing on a spring platform
    pub spring_jump_force: f32,
    /// Maximum horizontal speed from input
    pub player_speed: f32,
    /// Exponential smoothing factor toward the target horizontal speed
    pub acceleration: f32,
    /// Multiplicative decay of horizontal speed with no input
    pub friction: f32,

    // === Platform generation ===
    /// Minimum vertical gap between consecutive platforms
    pub platform_spacing_min: f32,
    /// Upper bound of the random gap (exclusive)
    pub platform_spacing_max: f32,
    /// Height above which platforms start thinning out
    pub difficulty_reference_height: f32,
    /// Extra spacing per 100 units climbed past the reference height
    pub difficulty_spacing_per_100: f32,
    /// Cap on the extra spacing
    pub difficulty_max_bonus: f32,
    /// Generation ceiling sits this far above the top of the viewport
    pub generation_margin: f32,
    /// Entities this far below the bottom of the viewport are culled
    pub cull_margin: f32,

    // === Moving platforms ===
    /// Base speed range for a freshly generated moving platform
    pub moving_speed_min: f32,
    pub moving_speed_max: f32,
    /// Speed scale added per 1000 points of score at generation time
    pub moving_speed_growth_per_1000: f32,
    /// Cap on generated moving platform speed
    pub moving_speed_cap: f32,
    /// Runtime speed multiplier added per point of score
    pub moving_score_multiplier_per_point: f32,
    /// Cap on the runtime speed multiplier
    pub moving_score_multiplier_cap: f32,

    // === Monsters ===
    /// Monsters never spawn below this score
    pub monster_spawn_min_score: u64,
    /// Spawn chance saturates at this score
    pub monster_spawn_max_score: u64,
    /// Per-frame spawn chance at the minimum score
    pub monster_spawn_chance_min: f32,
    /// Per-frame spawn chance at (and past) the maximum score
    pub monster_spawn_chance_max: f32,
    /// Candidate spawns closer than this to a live monster are rejected
    pub monster_min_distance: f32,
    /// Horizontal patrol speed
    pub monster_speed: f32,

    // === Shooting ===
    /// Projectile vertical velocity (negative = up)
    pub projectile_speed: f32,
    /// Frames the shooting animation blocks further shots
    pub shoot_cooldown: f32,
    /// Projectiles this far above the top of the viewport are culled
    pub projectile_margin: f32,

    // === Camera ===
    /// Added to the camera target; larger values keep the player higher on screen
    pub camera_offset: f32,

    // === Input ===
    /// Tilt angles within this many degrees of level produce no movement
    pub tilt_deadzone_deg: f32,

    // === Timing ===
    /// Upper bound on dt (100ms at the nominal 16ms frame)
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_force: -12.0,
            moving_jump_multiplier: 1.1,
            spring_jump_force: -18.0,
            player_speed: 5.0,
            acceleration: 0.2,
            friction: 0.85,

            platform_spacing_min: 80.0,
            platform_spacing_max: 120.0,
            difficulty_reference_height: 1000.0,
            difficulty_spacing_per_100: 1.0,
            difficulty_max_bonus: 15.0,
            generation_margin: 200.0,
            cull_margin: 100.0,

            moving_speed_min: 1.0,
            moving_speed_max: 2.0,
            moving_speed_growth_per_1000: 0.5,
            moving_speed_cap: 4.0,
            moving_score_multiplier_per_point: 0.0005,
            moving_score_multiplier_cap: 2.0,

            monster_spawn_min_score: 100,
            monster_spawn_max_score: 1000,
            monster_spawn_chance_min: 0.002,
            monster_spawn_chance_max: 0.01,
            monster_min_distance: 150.0,
            monster_speed: 1.5,

            projectile_speed: -10.0,
            shoot_cooldown: 10.0,
            projectile_margin: 50.0,

            camera_offset: 100.0,

            tilt_deadzone_deg: 5.0,

            max_frame_dt: 100.0 / crate::consts::NOMINAL_FRAME_MS,
        }
    }
}

impl Tuning {
    /// Jump impulse for landing on a platform of the given kind
    pub fn jump_impulse(&self, kind: super::state::PlatformKind) -> f32 {
        use super::state::PlatformKind;
        match kind {
            PlatformKind::Spring => self.spring_jump_force,
            PlatformKind::Moving => self.jump_force * self.moving_jump_multiplier,
            PlatformKind::Normal | PlatformKind::Breakable => self.jump_force,
        }
    }

    /// Extra platform spacing earned by climbing to `height` (positive = up)
    pub fn spacing_bonus(&self, height: f32) -> f32 {
        let excess = (height - self.difficulty_reference_height).max(0.0);
        (excess / 100.0 * self.difficulty_spacing_per_100).min(self.difficulty_max_bonus)
    }

    /// Runtime speed multiplier for moving platforms at the given score
    pub fn moving_score_multiplier(&self, score: u64) -> f32 {
        (1.0 + score as f32 * self.moving_score_multiplier_per_point)
            .min(self.moving_score_multiplier_cap)
    }

    /// Per-frame monster spawn chance at the given score (0 below the minimum)
    pub fn monster_spawn_chance(&self, score: u64) -> f32 {
        if score < self.monster_spawn_min_score {
            return 0.0;
        }
        let span = self
            .monster_spawn_max_score
            .saturating_sub(self.monster_spawn_min_score)
            .max(1) as f32;
        let t = ((score - self.monster_spawn_min_score) as f32 / span).min(1.0);
        self.monster_spawn_chance_min
            + (self.monster_spawn_chance_max - self.monster_spawn_chance_min) * t
    }

    /// Highest point a jump of the given impulse reaches
    pub fn jump_height(&self, impulse: f32) -> f32 {
        impulse * impulse / (2.0 * self.gravity)
    }
}
