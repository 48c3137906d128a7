//! Llama Spitter headless runner
//!
//! Drives a seeded session with a simple autopilot standing in for the
//! keyboard, feeds events to the headless mixer, and restarts after each
//! game over. Useful for balance checks and replaying a seed.
//!
//! Usage:
//!   RUST_LOG=info cargo run --release -- --seed 42 --ticks 20000

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use llama_spitter::Tuning;
    use llama_spitter::audio::AudioManager;
    use llama_spitter::consts::TICK_RATE;
    use llama_spitter::sim::{Direction, GameEvent, GameState, TickInput, tick};

    #[derive(Parser, Debug)]
    #[command(name = "llama-spitter")]
    #[command(about = "Run a headless Llama Spitter session with an autopilot")]
    struct Args {
        /// RNG seed for the session
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Total ticks to simulate
        #[arg(short, long, default_value_t = 20_000)]
        ticks: u64,

        /// Stop after this many game overs
        #[arg(long, default_value_t = 3)]
        max_runs: u32,

        /// JSON file overriding the default tuning
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Print the final session state as JSON
        #[arg(long)]
        dump_state: bool,

        /// Simulate with audio muted (restart is never held back)
        #[arg(long)]
        mute: bool,
    }

    /// Per-run results
    #[derive(Debug, Default)]
    struct RunSummary {
        score: u64,
        kills: u32,
        difficulty: u32,
        ticks: u64,
    }

    /// Held keys that produce `dir` as the player's facing
    fn keys_for(dir: Direction) -> TickInput {
        let (up, down, left, right) = match dir {
            Direction::Up => (true, false, false, false),
            Direction::Down => (false, true, false, false),
            Direction::Left => (false, false, true, false),
            Direction::Right => (false, false, false, true),
            Direction::UpLeft => (true, false, true, false),
            Direction::UpRight => (true, false, false, true),
            Direction::DownLeft => (false, true, true, false),
            Direction::DownRight => (false, true, false, true),
        };
        TickInput {
            up,
            down,
            left,
            right,
            ..Default::default()
        }
    }

    /// Face the nearest enemy and shoot on alternating ticks; wander toward
    /// pickups when the field is clear.
    fn autopilot(state: &GameState) -> TickInput {
        if state.is_game_over() {
            return TickInput {
                restart: true,
                ..Default::default()
            };
        }

        let me = state.player.center();
        let nearest_enemy = state
            .enemies
            .iter()
            .map(|e| e.center())
            .min_by(|a, b| a.distance_squared(me).total_cmp(&b.distance_squared(me)));

        if let Some(target) = nearest_enemy {
            let to_enemy = target - me;
            // Shoot on even ticks; on odd ticks back off if crowded
            if state.time_ticks % 2 == 0 {
                let mut input = Direction::from_vector(to_enemy)
                    .map(keys_for)
                    .unwrap_or_default();
                input.fire = true;
                return input;
            }
            if to_enemy.length() < 150.0 {
                let mut input = Direction::from_vector(-to_enemy)
                    .map(keys_for)
                    .unwrap_or_default();
                input.sprint = true;
                return input;
            }
            return TickInput::default();
        }

        state
            .pickups
            .iter()
            .map(|p| p.rect.center())
            .min_by(|a, b| a.distance_squared(me).total_cmp(&b.distance_squared(me)))
            .and_then(|p| Direction::from_vector(p - me))
            .map(keys_for)
            .unwrap_or_default()
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)
                .with_context(|| format!("loading tuning from {}", path.display()))?,
            None => Tuning::default(),
        };

        log::info!("Llama Spitter (headless) starting, seed {}", args.seed);

        let mut rng = Pcg32::seed_from_u64(args.seed);
        let mut state = GameState::new(tuning).context("building session")?;
        let mut audio = AudioManager::new();
        audio.set_muted(args.mute);

        let mut runs: Vec<RunSummary> = Vec::new();
        let mut run_start = 0u64;

        for t in 0..args.ticks {
            let input = autopilot(&state);
            tick(&mut state, &input, &audio, &mut rng);
            audio.handle_events(&state.events);
            audio.advance();

            for event in &state.events {
                match event {
                    GameEvent::PlayerDied => {
                        runs.push(RunSummary {
                            score: state.score,
                            kills: state.kills,
                            difficulty: state.difficulty_level(),
                            ticks: t + 1 - run_start,
                        });
                    }
                    GameEvent::Restarted => run_start = t + 1,
                    _ => {}
                }
            }

            if runs.len() as u32 >= args.max_runs && state.is_game_over() {
                break;
            }
        }

        println!();
        println!("=== RESULTS (seed {}) ===", args.seed);
        for (i, run) in runs.iter().enumerate() {
            println!(
                "  Run {}: score {:>6}  kills {:>4}  difficulty {:>2}  survived {:.1}s",
                i + 1,
                run.score,
                run.kills,
                run.difficulty,
                run.ticks as f64 / f64::from(TICK_RATE)
            );
        }
        if !state.is_game_over() {
            println!(
                "  In progress: score {:>6}  kills {:>4}  health {}",
                state.score, state.kills, state.player.health
            );
        }

        if args.dump_state {
            let json = serde_json::to_string_pretty(&state).context("serializing state")?;
            println!("{json}");
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on wasm32
}
