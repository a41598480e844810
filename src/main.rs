use anyhow::Result;
use clap::Parser;
use swarm_lib::app::report::format_histogram;
use swarm_lib::app::{App, InputEvent};
use swarm_lib::model::state::SimulationMode;
use swarm_io::HistoryLogger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulation variant to run
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Stop after this many ticks (runs until Ctrl+C otherwise)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Override the initial population size
    #[arg(long)]
    agents: Option<usize>,

    /// Place a target at `x,y` before the first tick (repeatable)
    #[arg(long = "target", value_name = "X,Y")]
    targets: Vec<String>,

    /// Place this many random targets before the first tick
    #[arg(long, default_value_t = 0)]
    random_targets: usize,

    /// Directory for the per-tick JSONL statistics log
    #[arg(long)]
    log_dir: Option<String>,

    /// Write a statistics line every N ticks
    #[arg(long, default_value_t = 30)]
    log_interval: u64,

    /// Ignore target_fps and run as fast as possible
    #[arg(long)]
    unpaced: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Flocking,
    Seeking,
}

#[tokio::main]
async fn main() -> Result<()> {
    swarm_core::init_logging();
    let args = Args::parse();

    let mut config = swarm_io::load_config_or_default(&args.config)?;
    match args.mode {
        Some(Mode::Flocking) => {
            config.mode = SimulationMode::Flocking;
            config.targets.initial_targets = 0;
        }
        Some(Mode::Seeking) => config.mode = SimulationMode::TargetSeeking,
        None => {}
    }
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(agents) = args.agents {
        config.world.agent_count = agents;
    }

    let mut app = App::new(config)?;
    if let Some(dir) = &args.log_dir {
        app = app.with_history(HistoryLogger::new_at(dir, args.log_interval)?);
    }
    if args.unpaced {
        app = app.unpaced();
    }
    for target in &args.targets {
        app.push_event(InputEvent::parse_target(target)?);
    }
    for _ in 0..args.random_targets {
        app.push_event(InputEvent::AddRandomTarget);
    }
    app.shutdown.listen_for_ctrl_c();

    let ticks = args.ticks;
    let (app, summary) = tokio::task::spawn_blocking(move || {
        let summary = app.run(ticks);
        (app, summary)
    })
    .await?;
    let summary = summary?;

    println!(
        "Ran {} ticks in {:.2?} ({} agents, {} targets, mean speed {:.3})",
        summary.ticks,
        summary.elapsed,
        summary.final_stats.agent_count,
        summary.final_stats.target_count,
        summary.final_stats.mean_speed
    );
    if !app.world.targets().is_empty() {
        print!("{}", format_histogram(&summary.histogram));
    }

    Ok(())
}
