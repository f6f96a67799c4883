use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::info;

use lane_rush::simulation::{
    ascii_map, Command, GameConfig, GameLoop, RenderSink, RenderView, Session,
};

#[derive(Parser)]
#[command(name = "lane_rush")]
#[command(about = "Two-player lane dodging game with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "3000")]
    ticks: u32,

    /// Seed for reproducible traffic
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds per simulation tick
    #[arg(long, default_value_t = lane_rush::simulation::TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Sleep for one tick interval between headless ticks
    #[arg(long)]
    realtime: bool,

    /// Background track played in UI mode
    #[arg(long, default_value = lane_rush::audio::DEFAULT_TRACK)]
    music: PathBuf,

    /// Automatic restarts after a game over in headless mode
    #[arg(long, default_value = "2")]
    max_restarts: u32,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let config = GameConfig {
            tick_interval: Duration::from_millis(self.tick_ms.max(1)),
            ..GameConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    fn session(&self, config: GameConfig) -> Session {
        match self.seed {
            Some(seed) => Session::new_with_seed(config, seed),
            None => Session::new(config),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            lane_rush::ui::run_with_ui(cli.session(config), cli.music.clone());
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
        run_headless(&cli, cli.session(config));
    }
    Ok(())
}

/// Prints the road to stdout once per simulated second
struct ConsoleRenderer {
    config: GameConfig,
    frames: u64,
    frames_per_print: u64,
}

impl RenderSink for ConsoleRenderer {
    fn present(&mut self, view: &RenderView) {
        self.frames += 1;
        if self.frames % self.frames_per_print != 0 {
            return;
        }
        println!(
            "--- Frame {} | Score: {} | High Score: {}{} ---",
            self.frames,
            view.score,
            view.high_score,
            if view.is_game_over() { " | GAME OVER" } else { "" }
        );
        println!("{}", ascii_map(view, &self.config));
    }
}

/// Run the game in headless mode (no graphics, no input)
fn run_headless(cli: &Cli, session: Session) {
    let tick_interval = session.config.tick_interval;
    let frames_per_print = (1000 / tick_interval.as_millis().max(1) as u64).max(1);

    info!("Running lane rush in headless mode...");
    info!("Ticks: {}, tick interval: {:?}", cli.ticks, tick_interval);

    let mut renderer = ConsoleRenderer {
        config: session.config.clone(),
        frames: 0,
        frames_per_print,
    };
    let mut game = GameLoop::new(session);
    let mut restarts = 0;

    for _ in 0..cli.ticks {
        let report = game.step(&mut renderer);

        if !report.collided.is_empty() && restarts < cli.max_restarts {
            restarts += 1;
            game.push(Command::Restart);
        }

        if cli.realtime {
            std::thread::sleep(tick_interval);
        }
    }

    let session = &game.session;
    let stats = &session.stats;
    info!("=== SIMULATION COMPLETE ===");
    info!("{}", session.summary());
    info!("Spawn attempts: {}", stats.spawn_attempts);
    info!("Traffic spawned: {}", stats.cars_spawned);
    info!("Traffic passed: {}", stats.cars_passed);
    info!("Rounds lost: {}", stats.rounds_lost);
    info!("Restarts: {}", restarts);
}
