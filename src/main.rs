//! Headless demo driver
//!
//! Runs a scripted session against the simulation core and reports the
//! outcome. Useful for profiling tuning changes without a browser host:
//!
//! ```text
//! backblast [config.json] [seed]
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Instant;

    use glam::Vec2;

    use backblast::audio::AudioDirector;
    use backblast::sim::{GamePhase, TickInput};
    use backblast::{Config, Game};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    eprintln!("cannot read {path}: {err}");
                    std::process::exit(1);
                }
            };
            match serde_json::from_str::<Config>(&text) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("bad config {path}: {err}");
                    std::process::exit(1);
                }
            }
        }
        None => Config::default(),
    };
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xB1A57);

    log::info!("demo session starting (seed {seed})");

    let mut game = Game::new(seed);
    let mut audio = AudioDirector::new();
    let started = Instant::now();
    let mut kills = 0u32;

    // First tick presses start; afterwards jump about twice a second,
    // aiming below the player so the recoil carries it back up.
    for tick_no in 0u32..1800 {
        let jump_target = (tick_no % 30 == 10).then(|| {
            let side = if tick_no % 60 == 10 { 40.0 } else { -40.0 };
            game.snapshot().player.center() + Vec2::new(side, 80.0)
        });
        let input = TickInput {
            jump_target,
            interact: tick_no == 0,
        };

        match game.advance(&config, &input, 1.0) {
            Ok(events) => {
                kills += events
                    .iter()
                    .filter(|e| matches!(e, backblast::sim::GameEvent::EnemyKilled { .. }))
                    .count() as u32;
                let now_ms = started.elapsed().as_secs_f64() * 1000.0;
                audio.handle_events(events, &config, now_ms);
            }
            Err(err) => {
                eprintln!("config rejected: {err}");
                std::process::exit(1);
            }
        }

        if game.snapshot().phase == GamePhase::GameOver {
            break;
        }
    }

    let snap = game.snapshot();
    println!(
        "phase {:?} - score {}, best {}, kills {}, {} enemies on screen",
        snap.phase,
        snap.score,
        snap.high_score,
        kills,
        snap.enemies.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM hosts drive the library crate directly; nothing to run here
}
