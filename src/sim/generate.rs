//! Procedural platform generation and monster spawning
//!
//! Platforms are laid out bottom to top with a running vertical cursor. The
//! gap between platforms widens with height, which is what makes the climb
//! harder. All randomness comes from the caller's RNG so runs replay exactly.

use rand::Rng;

use super::state::{Monster, Platform, PlatformKind, place_in_slot};
use super::tuning::Tuning;
use crate::consts::*;

/// Reset the platform store and lay out a fresh run from the anchor upward
pub fn initial_platforms<R: Rng + ?Sized>(
    platforms: &mut Vec<Platform>,
    tuning: &Tuning,
    rng: &mut R,
) {
    platforms.clear();
    platforms.push(Platform::anchor());
    fill_platforms(platforms, 0.0, 0, tuning, rng);
}

/// Generate platforms up to the ceiling above the camera.
///
/// Returns the number of platforms created. Stops silently when the store is
/// full; culling frees slots on a later frame.
pub fn fill_platforms<R: Rng + ?Sized>(
    platforms: &mut Vec<Platform>,
    camera_y: f32,
    score: u64,
    tuning: &Tuning,
    rng: &mut R,
) -> usize {
    let highest = highest_platform_top(platforms).unwrap_or(camera_y);
    let mut cursor = highest - tuning.platform_spacing_min;
    let ceiling = camera_y - VIEWPORT_HEIGHT - tuning.generation_margin;

    let mut created = 0;
    while cursor > ceiling {
        let platform = random_platform(cursor, score, tuning, rng);
        if place_in_slot(platforms, platform).is_none() {
            log::debug!("Platform store full at y={cursor:.0}, deferring generation");
            break;
        }
        created += 1;
        cursor -= next_spacing(cursor, tuning, rng);
    }
    created
}

/// A platform at height `y` with random x and kind
fn random_platform<R: Rng + ?Sized>(y: f32, score: u64, tuning: &Tuning, rng: &mut R) -> Platform {
    let x = rng.random_range(0..(VIEWPORT_WIDTH - PLATFORM_WIDTH) as u32) as f32;
    let kind = PlatformKind::from_roll(rng.random_range(0..100));

    match kind {
        PlatformKind::Moving => {
            let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            let base = if tuning.moving_speed_max > tuning.moving_speed_min {
                rng.random_range(tuning.moving_speed_min..tuning.moving_speed_max)
            } else {
                tuning.moving_speed_min
            };
            let growth = 1.0 + score as f32 / 1000.0 * tuning.moving_speed_growth_per_1000;
            let speed = (base * growth).min(tuning.moving_speed_cap);
            Platform::moving(x, y, direction, speed)
        }
        _ => Platform::new(x, y, kind),
    }
}

/// Vertical distance to the next platform above `y`
fn next_spacing<R: Rng + ?Sized>(y: f32, tuning: &Tuning, rng: &mut R) -> f32 {
    let jitter_range = (tuning.platform_spacing_max - tuning.platform_spacing_min).max(1.0) as u32;
    let jitter = rng.random_range(0..jitter_range) as f32;
    tuning.platform_spacing_min + jitter + tuning.spacing_bonus(-y)
}

/// Deactivate platforms that scrolled out below the generation window
pub fn cull_platforms(platforms: &mut [Platform], camera_y: f32, tuning: &Tuning) -> usize {
    let limit = camera_y + VIEWPORT_HEIGHT + tuning.cull_margin;
    let mut culled = 0;
    for platform in platforms.iter_mut().filter(|p| p.active) {
        if platform.pos.y > limit {
            platform.active = false;
            culled += 1;
        }
    }
    culled
}

/// Maybe spawn one monster above the viewport.
///
/// Only one wave at a time: nothing spawns while a monster is inside the
/// screen-sized band around the camera. Candidates too close to a live
/// monster are rejected.
pub fn maybe_spawn_monster<R: Rng + ?Sized>(
    monsters: &mut Vec<Monster>,
    camera_y: f32,
    score: u64,
    tuning: &Tuning,
    rng: &mut R,
) -> bool {
    let chance = tuning.monster_spawn_chance(score);
    if chance <= 0.0 || monsters.len() >= MAX_MONSTERS {
        return false;
    }

    let band_top = camera_y - VIEWPORT_HEIGHT;
    let band_bottom = camera_y + VIEWPORT_HEIGHT;
    let wave_on_screen = monsters
        .iter()
        .any(|m| m.active && m.pos.y >= band_top && m.pos.y <= band_bottom);
    if wave_on_screen {
        return false;
    }

    if rng.random::<f32>() >= chance {
        return false;
    }

    let x = rng.random_range(0..(VIEWPORT_WIDTH - MONSTER_WIDTH) as u32) as f32;
    let lift = rng.random_range(0..(VIEWPORT_HEIGHT / 2.0) as u32) as f32;
    let y = camera_y - MONSTER_HEIGHT - lift;
    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let candidate = Monster::new(x, y, direction, tuning.monster_speed);

    let center = candidate.rect().center();
    let crowded = monsters
        .iter()
        .filter(|m| m.active)
        .any(|m| m.rect().center().distance(center) < tuning.monster_min_distance);
    if crowded {
        return false;
    }

    log::debug!("Monster spawned at ({x:.0}, {y:.0}), score {score}");
    monsters.push(candidate);
    true
}

/// Top edge of the highest active platform, if any
pub fn highest_platform_top(platforms: &[Platform]) -> Option<f32> {
    platforms
        .iter()
        .filter(|p| p.active)
        .map(|p| p.pos.y)
        .min_by(f32::total_cmp)
}
