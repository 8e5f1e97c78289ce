#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use roguelike::app::App;
use roguelike::constants::LOOP_TIME;
use roguelike::formatter::CustomFormatter;
use roguelike::systems::components::GameConfig;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Command-line options.
struct Args {
    seed: Option<u64>,
    mute: bool,
    /// Verbose console logging when `RUST_LOG` is unset.
    console: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        seed: None,
        mute: false,
        console: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or_else(|| anyhow!("--seed requires a value"))?;
                args.seed = Some(value.parse().with_context(|| format!("Invalid seed: {value}"))?);
            }
            "--mute" => args.mute = true,
            "--console" | "-c" => args.console = true,
            other => return Err(anyhow!("Unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn init_tracing(console: bool) -> Result<()> {
    let default_level = if console { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .event_format(CustomFormatter)
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// The main entry point of the application.
///
/// Parses the command line, installs the tracing subscriber, then runs the frame loop until an exit is
/// requested.
pub fn main() -> Result<()> {
    let args = parse_args()?;
    init_tracing(args.console)?;

    let config = GameConfig {
        seed: args.seed,
        muted: args.mute,
        ..GameConfig::default()
    };
    let asset_root = PathBuf::from(env::var("ROGUELIKE_ASSETS").unwrap_or_else(|_| "assets".to_string()));

    let mut app = App::new(config, asset_root).map_err(|e| anyhow!("Could not create app: {e}"))?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    info!("Exiting");
    Ok(())
}
