mod autopilot;
mod config;
mod session;

use clap::{Parser, ValueEnum};
use snake_common::config::Validate;
use snake_common::games::SessionRng;
use snake_common::games::snake::{SnakeGameState, WallCollisionMode};
use snake_common::{log, logger};
use session::{SessionOptions, SnakeSession};

#[derive(Clone, Copy, ValueEnum)]
enum WallMode {
    Death,
    Wrap,
}

impl From<WallMode> for WallCollisionMode {
    fn from(mode: WallMode) -> Self {
        match mode {
            WallMode::Death => WallCollisionMode::Death,
            WallMode::Wrap => WallCollisionMode::WrapAround,
        }
    }
}

#[derive(Parser)]
#[command(name = "snake_runner", about = "Headless snake simulation driven by an autopilot")]
struct Args {
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    ticks: Option<u64>,

    #[arg(long)]
    games: Option<u32>,

    #[arg(long, value_enum)]
    wall_mode: Option<WallMode>,

    /// Run ticks back to back instead of at the configured interval.
    #[arg(long)]
    fast: bool,

    /// Save the effective configuration back to the config file.
    #[arg(long)]
    write_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = config::get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;

    if let Some(seed) = args.seed {
        config.run.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.run.max_ticks = ticks;
    }
    if let Some(games) = args.games {
        config.run.max_games = games;
    }
    if let Some(wall_mode) = args.wall_mode {
        config.game.wall_collision_mode = wall_mode.into();
    }
    config.validate()?;

    if args.write_config {
        config_manager.set_config(&config)?;
        log!("Configuration written to {}", args.config);
    }

    let mut rng = match config.run.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let options = SessionOptions {
        max_ticks: config.run.max_ticks,
        max_games: config.run.max_games,
        tick_interval: (!args.fast).then(|| config.game.tick_interval()),
    };

    let mut state = SnakeGameState::new(config.game);
    let summary = SnakeSession::run(&mut state, &mut rng, options).await;

    log!(
        "Played {} game(s) in {} ticks. Fruits: {}, bombs: {}, high score: {}",
        summary.games_played,
        summary.ticks,
        summary.fruits_eaten,
        summary.bombs_hit,
        summary.high_score
    );

    Ok(())
}
