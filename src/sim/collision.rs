//! Collision detection and response
//!
//! Three contact kinds are resolved each tick, in order: the player landing on
//! a platform, projectiles hitting monsters, and the player touching a monster.

use super::state::{GameEvent, GameState, Monster, Platform, PlatformKind, Player, Projectile};

/// Whether a falling player lands on this platform.
///
/// A rising player never lands, and the player's top edge must still be above
/// the platform's top edge so platforms can't be landed on from underneath.
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    if !platform.active || player.vel.y <= 0.0 {
        return false;
    }
    player.rect().overlaps(&platform.rect()) && player.pos.y < platform.pos.y
}

/// Result of a landing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub index: usize,
    pub kind: PlatformKind,
    /// False when the same slot was landed on last time
    pub counted: bool,
}

/// Land the player on the first matching platform in slot order.
///
/// Snaps the player onto the platform top, applies the jump impulse for the
/// platform kind and breaks breakable platforms.
pub fn resolve_platform_landing(state: &mut GameState) -> Option<Landing> {
    state.player.on_ground = false;

    let index = state
        .platforms
        .iter()
        .position(|platform| lands_on(&state.player, platform))?;

    let platform = &mut state.platforms[index];
    let kind = platform.kind;
    state.player.pos.y = platform.pos.y - state.player.size.y;
    state.player.vel.y = state.tuning.jump_impulse(kind);
    state.player.on_ground = true;

    if kind == PlatformKind::Breakable {
        platform.active = false;
        state.events.push(GameEvent::PlatformBroken { index });
    }

    let counted = state.last_landed != Some(index);
    if counted {
        state.platforms_landed += 1;
        state.last_landed = Some(index);
    }
    log::trace!("Landed on {kind:?} platform {index} (counted: {counted})");
    state.events.push(GameEvent::Landed { index, kind });

    Some(Landing {
        index,
        kind,
        counted,
    })
}

/// Kill monsters hit by projectiles. One hit per projectile, no piercing.
///
/// Returns the number of kills. Dead entries stay in place until compaction.
pub fn resolve_projectile_hits(projectiles: &mut [Projectile], monsters: &mut [Monster]) -> u32 {
    let mut kills = 0;
    for projectile in projectiles.iter_mut().filter(|p| p.active) {
        let shot = projectile.rect();
        for monster in monsters.iter_mut().filter(|m| m.active) {
            if shot.overlaps(&monster.rect()) {
                projectile.active = false;
                monster.active = false;
                kills += 1;
                break;
            }
        }
    }
    kills
}

/// Any overlap with a live monster is fatal, regardless of direction
pub fn player_hits_monster(player: &Player, monsters: &[Monster]) -> bool {
    let body = player.rect();
    monsters
        .iter()
        .any(|m| m.active && body.overlaps(&m.rect()))
}
