//! Prime Parkour headless runner
//!
//! Plays seeded sessions on autopilot at the fixed frame rate, feeding events
//! to the audio boundary and snapshots to a logging renderer, then prints a
//! run summary.

mod headless {
    use std::error::Error;
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;
    use serde::Serialize;

    use prime_parkour::audio::LogSink;
    use prime_parkour::sim::{GameEvent, GamePhase, GameState, LoopControl, LossReason, TickInput, tick};
    use prime_parkour::{Assets, AudioManager, RenderFrame, Renderer, Tuning};

    /// Run Prime Parkour sessions on autopilot
    #[derive(Debug, Parser)]
    #[command(name = "prime-parkour", version, about)]
    pub struct Args {
        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Maximum number of frames to simulate
        #[arg(long, default_value_t = 60 * 60 * 5)]
        frames: u64,
        /// JSON tuning file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Directory holding sprite and sound files
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Restarts allowed after GameOver/Won
        #[arg(long, default_value_t = 0)]
        restarts: u32,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    }

    /// Renderer that only traces what it would draw
    #[derive(Debug, Default)]
    struct LogRenderer {
        frames: u64,
    }

    impl Renderer for LogRenderer {
        fn draw(&mut self, frame: &RenderFrame) {
            self.frames += 1;
            log::trace!(
                "frame {}: {} items, score {}, charged {}",
                self.frames,
                frame.items.len(),
                frame.score,
                frame.charged
            );
            if let Some(text) = frame.overlay {
                log::info!("{}", text);
            }
        }
    }

    #[derive(Debug, Clone, Serialize)]
    struct RunSummary {
        outcome: GamePhase,
        score: u64,
        frames: u64,
        primes: u32,
        powerups: u32,
        flips: u32,
        loss: Option<LossReason>,
    }

    impl Default for RunSummary {
        fn default() -> Self {
            Self {
                outcome: GamePhase::Playing,
                score: 0,
                frames: 0,
                primes: 0,
                powerups: 0,
                flips: 0,
                loss: None,
            }
        }
    }

    impl RunSummary {
        fn record(&mut self, events: &[GameEvent]) {
            self.frames += 1;
            for event in events {
                match event {
                    GameEvent::CollectedPrime { .. } => self.primes += 1,
                    GameEvent::CollectedPowerUp => self.powerups += 1,
                    GameEvent::GravityFlipped { .. } => self.flips += 1,
                    GameEvent::GameOver { reason, .. } => self.loss = Some(*reason),
                    _ => {}
                }
            }
        }

        fn finish(mut self, state: &GameState) -> Self {
            self.outcome = state.phase;
            self.score = state.score;
            self
        }
    }

    #[derive(Debug, Serialize)]
    struct Summary {
        seed: u64,
        frames: u64,
        runs: Vec<RunSummary>,
    }

    pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
        let tuning = match &args.config {
            Some(path) => Tuning::from_json(&fs::read_to_string(path)?)?,
            None => Tuning::default(),
        };
        let assets = match &args.assets {
            Some(dir) => Assets::from_dir(dir),
            None => Assets::none(),
        };
        let seed = args.seed.unwrap_or_else(rand::random);

        let mut state = GameState::new(tuning, seed)?;
        let mut audio = AudioManager::new(Box::new(LogSink), assets.loaded_sounds());
        let mut renderer = LogRenderer::default();
        log::info!("Game initialized with seed: {}", seed);

        let play = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let restart = TickInput {
            restart: true,
            ..play.clone()
        };

        let mut runs = Vec::new();
        let mut current = RunSummary::default();
        let mut frames = 0;
        while frames < args.frames {
            let input = if state.phase.is_over() { &restart } else { &play };
            if tick(&mut state, input) == LoopControl::Quit {
                break;
            }
            frames += 1;

            let events = state.drain_events();
            audio.handle_events(&events);
            current.record(&events);
            renderer.draw(&RenderFrame::capture(&state, &assets));

            if state.phase.is_over() {
                runs.push(std::mem::take(&mut current).finish(&state));
                if runs.len() > args.restarts as usize {
                    break;
                }
            }
        }
        if !state.phase.is_over() {
            runs.push(current.finish(&state));
        }

        let summary = Summary { seed, frames, runs };
        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("seed {} - {} frames", summary.seed, summary.frames);
            for (i, r) in summary.runs.iter().enumerate() {
                println!(
                    "run {}: {:?} score {} after {} frames ({} primes, {} power-ups, {} flips)",
                    i + 1,
                    r.outcome,
                    r.score,
                    r.frames,
                    r.primes,
                    r.powerups,
                    r.flips
                );
                if let Some(loss) = r.loss {
                    println!("  lost to {:?}", loss);
                }
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();
    log::info!("Prime Parkour (headless) starting...");
    headless::run(headless::Args::parse())
}
