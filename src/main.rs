use std::io::{self, Write};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use theatre_sim::{config::Config, report, sim::Simulation};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Diagnostics go to stderr; stdout carries nothing but the report.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting theatre reservation simulator");

    let simulation = Simulation::new(config);
    simulation.run().await;

    let state = simulation.state();
    let report = report::render(&state.ledger.confirmations(), &state.ledger.rejections());
    print!("{report}");
    io::stdout().flush()?;

    Ok(())
}
