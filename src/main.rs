mod parallel;
mod report;
mod resistor_set;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use resistor_set::ResistorSet;

fn main() -> anyhow::Result<()> {
    // Stdout only carries the result
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let resistor_set = ResistorSet::builtin()?;
    tracing::info!(count = resistor_set.resistors.len(), "computing running parallel resistance");

    let running = resistor_set.running_parallel_resistance()?;
    println!("{}", report::display(&running));

    anyhow::Result::Ok(())
}
