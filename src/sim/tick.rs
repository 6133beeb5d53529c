//! Frame step
//!
//! Core game loop that advances the simulation by one variable-length frame.
//! Order matters: input, player physics, world update, collisions, camera,
//! score, then the terminal check.

use super::autopilot;
use super::camera::{player_fell, update_camera, update_score};
use super::collision::{player_hits_monster, resolve_platform_landing, resolve_projectile_hits};
use super::generate::{cull_platforms, fill_platforms, maybe_spawn_monster};
use super::input::{TickInput, apply_horizontal};
use super::state::{GameEvent, GameState, Projectile};
use crate::consts::VIEWPORT_HEIGHT;

/// Advance the game state by one frame of `dt` nominal frames
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    // Idle/demo mode - autopilot plays the game
    let input = if input.idle_mode {
        autopilot::drive(state)
    } else {
        input.clone()
    };

    if !state.game_running {
        if input.restart {
            state.restart();
        }
        return;
    }

    let dt = dt.clamp(0.0, state.tuning.max_frame_dt);
    state.time_ticks += 1;

    // --- INPUT ---
    let target = input.target_velocity(&state.tuning);
    apply_horizontal(&mut state.player, target, &state.tuning, dt);
    state.player.tick_shoot_timer(dt);
    if input.shoot {
        try_shoot(state);
    }

    // --- PLAYER PHYSICS ---
    state.player.integrate(state.tuning.gravity, dt);

    // --- WORLD ---
    update_platforms(state, dt);
    update_projectiles(state, dt);
    update_monsters(state, dt);

    // --- COLLISIONS ---
    resolve_platform_landing(state);
    let kills = resolve_projectile_hits(&mut state.projectiles, &mut state.monsters);
    for _ in 0..kills {
        state.events.push(GameEvent::MonsterKilled);
    }
    state.compact();
    let caught = player_hits_monster(&state.player, &state.monsters);

    // --- CAMERA & SCORE ---
    update_camera(state);
    update_score(state);

    if caught || player_fell(state) {
        game_over(state);
    }
}

/// Fire a projectile if the shooting animation is idle and there is room
pub fn try_shoot(state: &mut GameState) -> bool {
    if state.player.is_shooting {
        return false;
    }
    let shot = Projectile::fired_from(state.player.muzzle(), state.tuning.projectile_speed);
    if !state.push_projectile(shot) {
        return false;
    }
    state.player.is_shooting = true;
    state.player.shoot_timer = state.tuning.shoot_cooldown;
    state.events.push(GameEvent::Shot);
    true
}

/// Move, cull, then generate platforms; the generator also rolls for monsters
fn update_platforms(state: &mut GameState, dt: f32) {
    let multiplier = state.tuning.moving_score_multiplier(state.score);
    for platform in &mut state.platforms {
        platform.advance(dt, multiplier);
    }

    cull_platforms(&mut state.platforms, state.camera_y, &state.tuning);
    fill_platforms(
        &mut state.platforms,
        state.camera_y,
        state.score,
        &state.tuning,
        &mut state.rng,
    );

    if maybe_spawn_monster(
        &mut state.monsters,
        state.camera_y,
        state.score,
        &state.tuning,
        &mut state.rng,
    ) {
        state.events.push(GameEvent::MonsterSpawned);
    }
}

fn update_projectiles(state: &mut GameState, dt: f32) {
    let ceiling = state.camera_y - state.tuning.projectile_margin;
    for projectile in state.projectiles.iter_mut().filter(|p| p.active) {
        projectile.pos.y += projectile.vy * dt;
        if projectile.pos.y < ceiling {
            projectile.active = false;
        }
    }
    state.projectiles.retain(|p| p.active);
}

fn update_monsters(state: &mut GameState, dt: f32) {
    let floor = state.camera_y + VIEWPORT_HEIGHT + state.tuning.cull_margin;
    for monster in state.monsters.iter_mut().filter(|m| m.active) {
        monster.advance(dt);
        if monster.pos.y > floor {
            monster.active = false;
        }
    }
    state.monsters.retain(|m| m.active);
}

fn game_over(state: &mut GameState) {
    state.game_running = false;
    state.events.push(GameEvent::GameOver { score: state.score });
    log::info!(
        "Game over: score {}, {} platforms landed",
        state.score,
        state.platforms_landed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Monster, Platform, PlatformKind};
    use glam::Vec2;
    use proptest::prelude::*;

    /// Run with keys held for `frames` frames at dt = 1
    fn run(state: &mut GameState, input: &TickInput, frames: usize) {
        for _ in 0..frames {
            tick(state, input, 1.0);
        }
    }

    /// A platform directly under a falling player
    fn land_setup(kind: PlatformKind) -> GameState {
        let mut state = GameState::new(5);
        state.platforms = vec![Platform::new(200.0, 400.0, kind)];
        state.player.pos = Vec2::new(220.0, 400.0 - PLAYER_HEIGHT - 2.0);
        state.player.vel = Vec2::new(0.0, 5.0);
        state
    }

    #[test]
    fn test_first_step_from_rest() {
        let mut state = GameState::new(12345);
        state.player.vel.x = 3.0;
        let vy_before = state.player.vel.y;

        tick(&mut state, &TickInput::default(), 1.0);

        let t = &state.tuning;
        assert!((state.player.vel.x - 3.0 * t.friction).abs() < 1e-6);
        assert!((state.player.vel.y - (vy_before + t.gravity)).abs() < 1e-6);
        assert!(state.game_running);
    }

    #[test]
    fn test_player_bounces_on_anchor() {
        let mut state = GameState::new(12345);
        let mut landed = false;
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), 1.0);
            if state.player.on_ground {
                landed = true;
                assert_eq!(state.last_landed, Some(0));
                assert_eq!(state.player.vel.y, state.tuning.jump_force);
                break;
            }
        }
        assert!(landed);
        assert_eq!(state.platforms_landed, 1);
        assert!(state.events.contains(&GameEvent::Landed {
            index: 0,
            kind: PlatformKind::Normal
        }));
    }

    #[test]
    fn test_resting_on_anchor_counts_once() {
        let mut state = GameState::new(12345);
        // No platforms above the anchor: the player bounces in place
        state.platforms.truncate(1);
        state.tuning.generation_margin = -10_000.0;
        run(&mut state, &TickInput::default(), 300);
        assert!(state.game_running);
        assert_eq!(state.platforms_landed, 1);
    }

    #[test]
    fn test_spring_landing() {
        let mut state = land_setup(PlatformKind::Spring);
        tick(&mut state, &TickInput::default(), 1.0);
        assert!(state.player.on_ground);
        assert_eq!(state.player.vel.y, state.tuning.spring_jump_force);
    }

    #[test]
    fn test_breakable_landing_in_tick() {
        let mut state = land_setup(PlatformKind::Breakable);
        tick(&mut state, &TickInput::default(), 1.0);
        assert!(state.player.on_ground);
        assert!(!state.platforms[0].active);
    }

    #[test]
    fn test_rising_player_passes_through() {
        let mut state = land_setup(PlatformKind::Normal);
        state.player.vel.y = -8.0;
        tick(&mut state, &TickInput::default(), 1.0);
        assert!(!state.player.on_ground);
        assert_eq!(state.platforms_landed, 0);
    }

    #[test]
    fn test_projectile_kills_monster() {
        let mut state = GameState::new(5);
        let muzzle = state.player.muzzle();
        state.monsters.push(Monster::new(muzzle.x - 20.0, muzzle.y - 60.0, 1.0, 0.0));

        let shoot = TickInput {
            shoot: true,
            ..Default::default()
        };
        tick(&mut state, &shoot, 1.0);
        assert_eq!(state.projectiles.len(), 1);
        assert!(state.player.is_shooting);

        let mut killed = false;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 1.0);
            if state.events.contains(&GameEvent::MonsterKilled) {
                killed = true;
                break;
            }
        }
        assert!(killed);
        assert!(state.monsters.is_empty());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_shot_cooldown() {
        let mut state = GameState::new(5);
        assert!(try_shoot(&mut state));
        assert!(!try_shoot(&mut state));
        assert_eq!(state.projectiles.len(), 1);

        let cooldown = state.tuning.shoot_cooldown as usize;
        run(&mut state, &TickInput::default(), cooldown);
        assert!(!state.player.is_shooting);
        assert!(try_shoot(&mut state));
    }

    #[test]
    fn test_shot_refused_when_full() {
        let mut state = GameState::new(5);
        for _ in 0..MAX_PROJECTILES {
            state.push_projectile(Projectile::fired_from(Vec2::new(0.0, 300.0), -1.0));
        }
        assert!(!try_shoot(&mut state));
        assert!(!state.player.is_shooting);
    }

    #[test]
    fn test_projectiles_culled_above_view() {
        let mut state = GameState::new(5);
        state.push_projectile(Projectile::fired_from(Vec2::new(100.0, -40.0), -20.0));
        tick(&mut state, &TickInput::default(), 1.0);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_monster_contact_is_fatal() {
        let mut state = GameState::new(5);
        let p = state.player.pos;
        state.monsters.push(Monster::new(p.x - 5.0, p.y - 5.0, 1.0, 0.0));
        tick(&mut state, &TickInput::default(), 1.0);
        assert!(!state.game_running);
        assert!(matches!(state.events.last(), Some(GameEvent::GameOver { .. })));
    }

    #[test]
    fn test_monsters_culled_below_view() {
        let mut state = GameState::new(5);
        let below = state.camera_y + VIEWPORT_HEIGHT + state.tuning.cull_margin + 10.0;
        state.monsters.push(Monster::new(200.0, below, 1.0, 1.5));
        state.monsters.push(Monster::new(200.0, -300.0, 1.0, 0.0));
        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.monsters.len(), 1);
        assert_eq!(state.monsters[0].pos.y, -300.0);

        state.monsters[0].pos.y = below;
        tick(&mut state, &TickInput::default(), 1.0);
        assert!(state.monsters.is_empty());
    }

    #[test]
    fn test_falling_off_screen_ends_run() {
        let mut state = GameState::new(5);
        state.platforms.clear();
        state.tuning.generation_margin = -10_000.0;
        run(&mut state, &TickInput::default(), 200);
        assert!(!state.game_running);
    }

    #[test]
    fn test_no_simulation_after_game_over() {
        let mut state = GameState::new(5);
        state.game_running = false;
        let before = state.player.clone();
        run(&mut state, &TickInput::default(), 5);
        assert_eq!(state.player, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = GameState::new(5);
        state.score = 321;
        state.platforms_landed = 17;
        state.camera_y = -3210.0;
        state.last_landed = Some(4);
        state.monsters.push(Monster::new(0.0, 0.0, 1.0, 1.0));
        state.player.pos = Vec2::new(5.0, 9999.0);
        state.game_running = false;

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, 1.0);
        assert!(state.game_running);
        assert_eq!(state.score, 0);
        assert_eq!(state.platforms_landed, 0);
        assert_eq!(state.last_landed, None);
        assert_eq!(state.camera_y, 0.0);
        assert!(state.monsters.is_empty());
        assert_eq!(state.platforms[0], Platform::anchor());
        assert!(state.platforms.len() > 1);
        assert_eq!(state.player, crate::sim::state::Player::spawn());
        assert!(state.events.contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut state = GameState::new(5);
        state.score = 42;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, 1.0);
        assert_eq!(state.score, 42);
    }

    #[test]
    fn test_dt_clamped() {
        let mut a = GameState::new(5);
        let mut b = GameState::new(5);
        let max_dt = b.tuning.max_frame_dt;
        tick(&mut a, &TickInput::default(), 1000.0);
        tick(&mut b, &TickInput::default(), max_dt);
        assert_eq!(a.player.pos, b.player.pos);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                shoot: true,
                ..Default::default()
            },
            TickInput {
                tilt_deg: Some(330.0),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input, 1.0);
                tick(&mut state2, input, 1.0);
            }
        }

        let a = serde_json::to_string(&state1).unwrap();
        let b = serde_json::to_string(&state2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_autopilot_climbs() {
        let mut state = GameState::new(2024);
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut best = 0;
        for _ in 0..600 {
            tick(&mut state, &idle, 1.0);
            best = best.max(state.platforms_landed);
        }
        assert!(best >= 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_world_invariants(
            seed in any::<u64>(),
            moves in proptest::collection::vec((0u8..4, any::<bool>(), 0.0f32..3.0), 1..200),
        ) {
            let mut state = GameState::new(seed);
            let mut last_score = state.score;
            let mut last_camera = state.camera_y;
            for (dir, shoot, dt) in moves {
                let input = TickInput {
                    left: dir == 1,
                    right: dir == 2,
                    shoot,
                    ..Default::default()
                };
                tick(&mut state, &input, dt);

                prop_assert!(state.score >= last_score);
                prop_assert!(state.camera_y <= last_camera);
                prop_assert!(state.monsters.iter().all(|m| m.active));
                prop_assert!(state.projectiles.iter().all(|p| p.active));
                prop_assert!(state.platforms.len() <= MAX_PLATFORMS);
                prop_assert!(state.monsters.len() <= MAX_MONSTERS);
                prop_assert!(state.projectiles.len() <= MAX_PROJECTILES);
                last_score = state.score;
                last_camera = state.camera_y;
            }
        }
    }
}
