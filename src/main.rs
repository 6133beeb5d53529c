//! Doodle Jump entry point
//!
//! Native builds run a headless autopilot session: the simulation is driven at
//! the nominal frame rate and each frame is built into a vertex list, the same
//! way a windowed host would before uploading it.
//!
//! Usage: `doodle-jump [seed] [frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use doodle_jump::consts::NOMINAL_FRAME_MS;
    use doodle_jump::renderer::{Sprite, SpriteAtlas, build_frame};
    use doodle_jump::sim::{GameEvent, GameState, TickInput, tick};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42u64);
    let frames = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600u32);

    log::info!("Doodle Jump (native) starting...");
    log::info!("Headless autopilot run: seed {seed}, {frames} frames");

    // Placeholder sheet; platforms and projectiles fall back to flat colors
    let atlas = SpriteAtlas::from_grid(
        4,
        2,
        &[
            (Sprite::Player, 0, 0),
            (Sprite::PlayerShooting, 1, 0),
            (Sprite::Monster, 2, 0),
        ],
    );

    let mut state = GameState::new(seed);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut now_ms = 0u64;
    let mut best = 0u64;
    let mut games = 1u32;
    let mut vertex_total = 0usize;

    for frame_index in 0..frames {
        let dt = state.advance_clock(now_ms);
        now_ms += NOMINAL_FRAME_MS as u64;

        tick(&mut state, &input, dt);

        for event in &state.events {
            match event {
                GameEvent::GameOver { score } => {
                    best = best.max(*score);
                    log::info!("Game {games} over at frame {frame_index} with score {score}");
                }
                GameEvent::Restarted => games += 1,
                _ => {}
            }
        }

        let frame = build_frame(&state, Some(&atlas));
        vertex_total += frame.vertices.len();
        if frame_index % 600 == 0 {
            log::debug!(
                "Frame {frame_index}: score {}, {} drawn, {} culled, {} platforms",
                state.score,
                frame.drawn,
                frame.skipped,
                state.active_platform_count()
            );
        }
    }

    best = best.max(state.score);
    log::info!("Final run lasted {} ticks", state.time_ticks);
    log::info!(
        "Finished: {games} game(s), best score {best}, avg {} vertices/frame",
        vertex_total / frames.max(1) as usize
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives the library directly
}
