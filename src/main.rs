use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use torus_snake::game::{GameConfig, InputPolicy};
use torus_snake::modes::HumanMode;
use torus_snake::render::Tui;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid, in the terminal")]
struct Cli {
    /// TOML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Starting speed, in ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Speed gained per apple
    #[arg(long)]
    speed_step: Option<u32>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Which key press wins when several arrive within one tick
    #[arg(long, value_enum)]
    input_policy: Option<Policy>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// Most recent press is used
    LastWins,
    /// First press is used
    FirstWins,
}

impl From<Policy> for InputPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::LastWins => InputPolicy::LastWins,
            Policy::FirstWins => InputPolicy::FirstWins,
        }
    }
}

impl Cli {
    /// Config file (or defaults) with command line overrides applied
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_toml_file(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(speed) = self.speed {
            config.speed_start = speed;
            config.speed_max = config.speed_max.map(|max| max.max(speed));
        }
        if let Some(step) = self.speed_step {
            config.speed_step = step;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(policy) = self.input_policy {
            config.input_policy = policy.into();
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "torus_snake=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;

    let mut tui = Tui::enter()?;
    let mut human_mode = HumanMode::new(config);
    human_mode.run(&mut tui).await
}
