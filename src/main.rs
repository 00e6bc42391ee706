use anyhow::{bail, Context, Result};
use kanban::{config::GlobalConfig, logging, tui, tui::board::BoardState};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: kanban [OPTIONS]

Options:
  --config <PATH>  Read configuration from PATH instead of ~/.config/kanban/config.toml
  --empty          Start with an empty board
  -h, --help       Print this help";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    empty: bool,
    help: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--empty" => parsed.empty = true,
            "-h" | "--help" => parsed.help = true,
            other => bail!("Unknown argument '{}'\n\n{}", other, USAGE),
        }
    }
    Ok(parsed)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load_or_create(&GlobalConfig::config_path()?)?,
    };

    let _log_guard = logging::init(&config)?;

    let board = if args.empty || !config.board.seed_sample_tasks {
        BoardState::new()
    } else {
        BoardState::sample()
    };

    let mut app = tui::App::new(&config, board)?;
    let result = app.run().await;
    drop(app);

    if let Err(err) = &result {
        tracing::error!(error = %err, "board exited with error");
    }
    result
}
