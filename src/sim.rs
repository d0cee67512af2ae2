use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::ledger::BookingLedger;
use crate::models::Theatre;
use crate::services::customer::{Customer, Outcome};
use crate::SimState;

/// Drives one full scenario: builds the theatres, races the customer
/// tasks against them and waits for quiescence under the deadline.
pub struct Simulation {
    state: Arc<SimState>,
    // Fixed seed makes every worker's draws reproducible in tests.
    seed: Option<u64>,
}

impl Simulation {
    pub fn new(config: Config) -> Self {
        let theatres = (1..=config.scenario.theatre_count)
            .map(|number| Theatre::new(number, config.scenario.seats_per_theatre))
            .collect();
        Self {
            state: Arc::new(SimState {
                theatres,
                ledger: BookingLedger::new(),
                config,
            }),
            seed: None,
        }
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(config)
        }
    }

    pub fn state(&self) -> Arc<SimState> {
        self.state.clone()
    }

    /// Spawns one task per customer and waits for all of them. When the
    /// deadline elapses first, the remaining workers get the shutdown
    /// signal, a short grace period to flush their results, and are then
    /// abandoned; whatever they already wrote stays in the ledger.
    pub async fn run(&self) {
        let scenario = self.state.config.scenario.clone();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let mut workers = JoinSet::new();
        for id in 1..=scenario.customer_count {
            let rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(id as u64)),
                None => StdRng::from_entropy(),
            };
            workers.spawn(Customer::new(id).run(self.state.clone(), shutdown_rx.clone(), rng));
        }
        drop(shutdown_rx);

        info!(
            customers = scenario.customer_count,
            theatres = self.state.theatres.len(),
            "🎭 all customers dispatched"
        );

        let mut interrupted = 0usize;
        let drained = timeout(
            scenario.await_deadline(),
            drain(&mut workers, &mut interrupted),
        )
        .await;

        if drained.is_err() {
            warn!(
                outstanding = workers.len(),
                "await deadline elapsed, interrupting remaining customers"
            );
            // Разбудить спящих работников, чтобы они успели записать результат
            let _ = shutdown_tx.send(true);
            let _ = timeout(
                scenario.shutdown_grace(),
                drain(&mut workers, &mut interrupted),
            )
            .await;
            // Stragglers keep running detached; the ledger clones its
            // contents under lock, so the report cannot be raced.
            workers.detach_all();
        }

        info!(
            confirmed = self.state.ledger.confirmed_count(),
            turned_away = self.state.ledger.turned_away_count(),
            interrupted,
            "✅ simulation finished"
        );
        for theatre in &self.state.theatres {
            info!(
                theatre = theatre.number(),
                free = theatre.free_seats(),
                "final occupancy"
            );
        }
    }
}

async fn drain(workers: &mut JoinSet<Outcome>, interrupted: &mut usize) {
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(Outcome::Interrupted) => *interrupted += 1,
            Ok(_) => {}
            Err(err) => error!("customer task failed: {err}"),
        }
    }
}
