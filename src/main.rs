use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use fluxcell::config::Config;
use fluxcell::counter::{clamp_step, coerce_step, parse_step, CounterReducer, CounterState};
use fluxcell::store::{Store, StoreContext};
use fluxcell::ui;

#[derive(Debug, Parser)]
#[command(
    name = "fluxcell",
    version,
    about = "Counter demo for the fluxcell state container"
)]
struct Args {
    /// Config file path (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial step size; fractional input truncates toward zero.
    #[arg(long)]
    step: Option<String>,

    /// Tick interval of the UI loop in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    fluxcell::logging::init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    let initial = initial_state(&config, args.step.as_deref())?;
    let tick_ms = args.tick_ms.unwrap_or(config.ui.tick_ms).max(1);

    let ctx = StoreContext::new(Store::<CounterReducer>::new(initial));
    ui::runtime::run(&ctx, Duration::from_millis(tick_ms))?;
    Ok(())
}

/// CLI step overrides the config step; both coerce and clamp the same
/// way before the value reaches the store.
fn initial_state(config: &Config, step_override: Option<&str>) -> anyhow::Result<CounterState> {
    let step = match step_override {
        Some(raw) => parse_step(raw).with_context(|| format!("invalid --step value '{raw}'"))?,
        None => coerce_step(config.counter.step),
    };

    Ok(CounterState {
        counter: config.counter.initial,
        step_size: clamp_step(step),
    })
}
