//! Game state and core simulation types
//!
//! The whole world lives in one `GameState` value: the player, the entity
//! stores, camera, score and the seeded RNG. Nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::generate;
use super::rect::Rect;
use super::tuning::Tuning;
use crate::consts::*;

/// The jumping character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
    /// -1.0 = facing left, 1.0 = facing right
    pub facing: f32,
    /// Shooting animation in progress (blocks further shots)
    pub is_shooting: bool,
    /// Frames left in the shooting animation
    pub shoot_timer: f32,
}

impl Player {
    /// Fresh player hovering over the anchor platform
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(
                VIEWPORT_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
                VIEWPORT_HEIGHT - PLAYER_SPAWN_BOTTOM_OFFSET,
            ),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            on_ground: false,
            facing: 1.0,
            is_shooting: false,
            shoot_timer: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Where projectiles leave the player: center-x, top-y
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y)
    }

    /// Count down the shooting animation
    pub fn tick_shoot_timer(&mut self, dt: f32) {
        if self.is_shooting {
            self.shoot_timer -= dt;
            if self.shoot_timer <= 0.0 {
                self.shoot_timer = 0.0;
                self.is_shooting = false;
            }
        }
    }

    /// Gravity then position, with horizontal wraparound
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        self.vel.y += gravity * dt;
        self.pos += self.vel * dt;
        self.pos.x = crate::wrap_x(self.pos.x, self.size.x);
    }
}

/// Platform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Normal,
    /// Slides horizontally between the screen edges
    Moving,
    /// Breaks after one landing
    Breakable,
    /// Launches the player higher than a normal jump
    Spring,
}

impl PlatformKind {
    /// Classify a 0-99 roll: 85% normal, 5% each of the rest
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..85 => PlatformKind::Normal,
            85..90 => PlatformKind::Moving,
            90..95 => PlatformKind::Breakable,
            _ => PlatformKind::Spring,
        }
    }
}

/// A platform slot. Inactive slots are free for reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PlatformKind,
    pub active: bool,
    /// -1.0, 0.0 or 1.0
    pub move_direction: f32,
    /// Only meaningful for `PlatformKind::Moving`
    pub move_speed: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, kind: PlatformKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
            kind,
            active: true,
            move_direction: 0.0,
            move_speed: 0.0,
        }
    }

    /// The guaranteed normal platform the player starts over
    pub fn anchor() -> Self {
        Self::new(
            VIEWPORT_WIDTH / 2.0 - PLATFORM_WIDTH / 2.0,
            VIEWPORT_HEIGHT - ANCHOR_BOTTOM_OFFSET,
            PlatformKind::Normal,
        )
    }

    pub fn moving(x: f32, y: f32, direction: f32, speed: f32) -> Self {
        Self {
            move_direction: direction,
            move_speed: speed,
            ..Self::new(x, y, PlatformKind::Moving)
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Slide a moving platform; bounces off the screen edges without overshoot
    pub fn advance(&mut self, dt: f32, speed_multiplier: f32) {
        if !self.active || self.kind != PlatformKind::Moving {
            return;
        }
        self.pos.x += self.move_direction * self.move_speed * speed_multiplier * dt;
        bounce_between_edges(&mut self.pos.x, self.size.x, &mut self.move_direction);
    }
}

/// Monster types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MonsterKind {
    #[default]
    Basic,
}

/// A patrolling monster; touching it ends the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed magnitude
    pub speed: f32,
    /// -1.0 or 1.0
    pub move_direction: f32,
    pub kind: MonsterKind,
    pub active: bool,
}

impl Monster {
    pub fn new(x: f32, y: f32, direction: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(MONSTER_WIDTH, MONSTER_HEIGHT),
            speed,
            move_direction: direction,
            kind: MonsterKind::Basic,
            active: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.pos.x += self.move_direction * self.speed * dt;
        bounce_between_edges(&mut self.pos.x, self.size.x, &mut self.move_direction);
    }
}

/// A shot travelling straight up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative = up)
    pub vy: f32,
    pub active: bool,
}

impl Projectile {
    /// Spawn centered on the muzzle point, body extending upward
    pub fn fired_from(muzzle: Vec2, vy: f32) -> Self {
        Self {
            pos: Vec2::new(muzzle.x - PROJECTILE_WIDTH / 2.0, muzzle.y - PROJECTILE_HEIGHT),
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            vy,
            active: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

fn bounce_between_edges(x: &mut f32, width: f32, direction: &mut f32) {
    if *x <= 0.0 {
        *x = 0.0;
        *direction = 1.0;
    } else if *x + width >= VIEWPORT_WIDTH {
        *x = VIEWPORT_WIDTH - width;
        *direction = -1.0;
    }
}

/// Notable things that happened during the last tick (for render/audio)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Landed { index: usize, kind: PlatformKind },
    PlatformBroken { index: usize },
    Shot,
    MonsterSpawned,
    MonsterKilled,
    GameOver { score: u64 },
    Restarted,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Random source for generation and spawning
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub player: Player,
    /// Slot-reused store (inactive = free); never longer than `MAX_PLATFORMS`
    pub platforms: Vec<Platform>,
    /// Compacted store; never holds inactive entries between ticks
    pub monsters: Vec<Monster>,
    /// Compacted store; never holds inactive entries between ticks
    pub projectiles: Vec<Projectile>,
    /// Top of the viewport in world space; only ever decreases
    pub camera_y: f32,
    pub score: u64,
    /// Distinct landings this run
    pub platforms_landed: u32,
    /// Slot index of the last platform landed on
    pub last_landed: Option<usize>,
    pub game_running: bool,
    /// Wall-clock time of the previous frame, in milliseconds
    pub last_time_ms: Option<u64>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            player: Player::spawn(),
            platforms: Vec::with_capacity(MAX_PLATFORMS),
            monsters: Vec::with_capacity(MAX_MONSTERS),
            projectiles: Vec::with_capacity(MAX_PROJECTILES),
            camera_y: 0.0,
            score: 0,
            platforms_landed: 0,
            last_landed: None,
            game_running: true,
            last_time_ms: None,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.populate();
        log::info!("New run (seed {}): {} platforms", seed, state.active_platform_count());
        state
    }

    /// Reinitialize the run. The RNG keeps its stream so the new layout differs.
    pub fn restart(&mut self) {
        self.player = Player::spawn();
        self.monsters.clear();
        self.projectiles.clear();
        self.camera_y = 0.0;
        self.score = 0;
        self.platforms_landed = 0;
        self.last_landed = None;
        self.game_running = true;
        self.time_ticks = 0;
        self.populate();
        self.events.push(GameEvent::Restarted);
        log::info!("Run restarted: {} platforms", self.active_platform_count());
    }

    fn populate(&mut self) {
        generate::initial_platforms(&mut self.platforms, &self.tuning, &mut self.rng);
    }

    /// Convert wall-clock time into a normalized, clamped dt
    pub fn advance_clock(&mut self, now_ms: u64) -> f32 {
        let elapsed = match self.last_time_ms {
            Some(last) => now_ms.saturating_sub(last) as f32,
            None => NOMINAL_FRAME_MS,
        };
        self.last_time_ms = Some(now_ms);
        frame_dt(elapsed, self.tuning.max_frame_dt)
    }

    /// Append a monster if capacity remains
    pub fn push_monster(&mut self, monster: Monster) -> bool {
        if self.monsters.len() >= MAX_MONSTERS {
            return false;
        }
        self.monsters.push(monster);
        true
    }

    /// Append a projectile if capacity remains
    pub fn push_projectile(&mut self, projectile: Projectile) -> bool {
        if self.projectiles.len() >= MAX_PROJECTILES {
            return false;
        }
        self.projectiles.push(projectile);
        true
    }

    /// Squeeze dead monsters and projectiles out, keeping survivor order
    pub fn compact(&mut self) {
        self.monsters.retain(|m| m.active);
        self.projectiles.retain(|p| p.active);
    }

    pub fn active_platforms(&self) -> impl Iterator<Item = (usize, &Platform)> {
        self.platforms.iter().enumerate().filter(|(_, p)| p.active)
    }

    pub fn active_platform_count(&self) -> usize {
        self.platforms.iter().filter(|p| p.active).count()
    }

    /// Bottom edge of the viewport in world space
    pub fn viewport_bottom(&self) -> f32 {
        self.camera_y + VIEWPORT_HEIGHT
    }
}

/// Normalize an elapsed time to nominal frames, clamped to `max_dt`
pub fn frame_dt(elapsed_ms: f32, max_dt: f32) -> f32 {
    (elapsed_ms / NOMINAL_FRAME_MS).clamp(0.0, max_dt)
}

/// Store a platform in the first inactive slot, else append under capacity.
/// `None` when full.
pub(crate) fn place_in_slot(platforms: &mut Vec<Platform>, platform: Platform) -> Option<usize> {
    if let Some(index) = platforms.iter().position(|p| !p.active) {
        platforms[index] = platform;
        return Some(index);
    }
    if platforms.len() < MAX_PLATFORMS {
        platforms.push(platform);
        return Some(platforms.len() - 1);
    }
    None
}
