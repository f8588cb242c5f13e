use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{GameConfig, GameState, config::DEFAULT_TICK_MS};
use grid_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a 2D or 3D grid")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "16")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "16")]
    height: usize,

    /// Grid depth; enables the in/out axis
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Milliseconds per simulation tick
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: f64,

    /// Write tracing output to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the initial state as JSON and exit
    #[arg(long)]
    dump_state: bool,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let config = match self.depth {
            Some(depth) => GameConfig::volumetric(self.width, self.height, depth),
            None => GameConfig::new(self.width, self.height),
        };
        GameConfig {
            seed: self.seed,
            ..config.with_tick_ms(self.tick_ms)
        }
    }
}

/// The terminal belongs to the UI, so logs only go to a file when asked.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = cli.game_config();

    if cli.dump_state {
        let state = GameState::new(&config).context("Invalid game configuration")?;
        println!("{}", state.snapshot().to_json()?);
        return Ok(());
    }

    let mut human_mode = HumanMode::new(&config)?;
    human_mode.run().await?;

    Ok(())
}
