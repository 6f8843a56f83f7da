//! Replays a scripted boss encounter through the target-of-interest task.
//!
//! ```bash
//! cargo run -p encounter-sim -- crates/encounter-sim/scripts/shielded-boss.ron
//! RUST_LOG=target_of_interest=debug cargo run -p encounter-sim -- script.ron --format json
//! ```

mod report;
mod script;
mod sim;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use report::Format;
use script::Script;

/// Replay a boss encounter and print the decision made on every tick
#[derive(Parser)]
#[command(name = "encounter-sim", version)]
struct Cli {
    /// Encounter script in RON format
    script: PathBuf,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 100)]
    period_ms: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let script = Script::load(&cli.script)?;
    tracing::info!(
        script = %cli.script.display(),
        frames = script.frames.len(),
        "replaying encounter"
    );

    let sim = sim::simulate(script, Duration::from_millis(cli.period_ms)).await?;
    for tick in &sim.ticks {
        println!("{}", tick.render(cli.format)?);
    }

    tracing::info!(phase = %sim.phase, completed = sim.completed, "encounter finished");
    Ok(())
}
