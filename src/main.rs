use anyhow::Result;
use clap::Parser;
use objectlife_lib::app::App;
use objectlife_lib::model::metrics::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "headless")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Stop after this many ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the configured RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the final world snapshot as JSON to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Headless,
    Realtime,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = App::load_config(&args.config)?;
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }

    let mut app = App::new(config)?;
    app.max_ticks = args.ticks;
    app.shutdown.set_snapshot_path(args.snapshot);

    match args.mode {
        Mode::Headless => app.run_headless()?,
        Mode::Realtime => app.run_realtime().await?,
    }

    std::process::exit(app.shutdown.exit_code());
}
