//! Flappy Gopher entry point
//!
//! Native builds run a headless autopilot session against file storage
//! (`%APPDATA%` on Windows, next to the executable elsewhere).
//! Usage: `flappy-gopher [frames] [tuning.json]`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_gopher::audio::{AudioManager, LogSink};
    use flappy_gopher::persistence::FileStorage;
    use flappy_gopher::sim::{FrameInput, GameEvent, Snapshot};
    use flappy_gopher::{Session, Settings, Tuning};

    env_logger::init();
    log::info!("Flappy Gopher (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let frames: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(10_000);
    let tuning = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match Tuning::from_json(&json) {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::error!("{path}: {e}");
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("{path}: {e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let storage = FileStorage::default_location();
    let mut audio = AudioManager::new(LogSink, &Settings::load(&storage));
    let seed = rand::random::<u64>();
    let mut session = match Session::new(tuning, storage, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid tuning: {e}");
            std::process::exit(1);
        }
    };

    /// Flap when sinking below the opening of the next gap; confirm restarts
    fn autopilot(snapshot: &Snapshot, tuning: &Tuning) -> FrameInput {
        if snapshot.restartable {
            return FrameInput {
                flap: true,
                ..Default::default()
            };
        }
        let player_x = tuning.player_screen_x + tuning.player_size.x / 2.0;
        let next_gap = snapshot
            .gaps
            .iter()
            .filter(|g| g.center_x - snapshot.scroll_x + tuning.obstacle_half_width() > player_x)
            .min_by(|a, b| a.center_x.total_cmp(&b.center_x));
        let target_y = next_gap.map_or(tuning.screen_height / 2.0, |g| g.center_y);
        let center_y = snapshot.player.pos.y + tuning.player_size.y / 2.0;
        FrameInput {
            flap: snapshot.player.vel.y > 0.0 && center_y > target_y + tuning.gap_height / 6.0,
            ..Default::default()
        }
    }

    let tuning = session.tuning().clone();
    let mut input = FrameInput::default();
    let mut runs = 0;
    for _ in 0..frames {
        let snapshot = session.advance_frame(&input);
        audio.handle_events(snapshot.events);
        if snapshot.events.contains(&GameEvent::RunEnded) {
            runs += 1;
        }
        input = autopilot(&snapshot, &tuning);
    }

    let snapshot = session.snapshot();
    log::info!(
        "Played {} frames: {} runs ended, best score {}, {} runs on record",
        frames,
        runs,
        snapshot.best_score,
        session.history().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM hosts drive `Session` directly
}
