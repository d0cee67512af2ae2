//! customer.rs
//!
//! Рабочая задача одного покупателя. Каждый покупатель выполняется ровно
//! один раз: выбирает случайный театр и случайное количество мест,
//! пытается забронировать их одним атомарным блоком и после задержки
//! подтверждения записывает результат в общий журнал.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use tokio::sync::watch;
use tokio::time::{sleep, Duration};
use tracing::{debug, warn};

use crate::models::Confirmation;
use crate::SimState;

/// Final state of one customer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Seats reserved and the confirmation delay ran to completion.
    Confirmed,
    /// Not enough free seats in the chosen theatre.
    TurnedAway,
    /// Shutdown arrived during the confirmation delay. The reservation
    /// still counts: seats are committed the moment the grab succeeds.
    Interrupted,
}

pub struct Customer {
    id: u32,
}

impl Customer {
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub async fn run(
        self,
        state: Arc<SimState>,
        mut shutdown: watch::Receiver<bool>,
        mut rng: StdRng,
    ) -> Outcome {
        let scenario = &state.config.scenario;

        // Случайный выбор театра и количества мест
        let theatre = &state.theatres[rng.gen_range(0..state.theatres.len())];
        let seat_count = rng.gen_range(scenario.request_min..=scenario.request_max);

        let seat_numbers = theatre.reserve_block(seat_count);
        if seat_numbers.is_empty() {
            debug!(
                customer = self.id,
                theatre = theatre.number(),
                requested = seat_count,
                "turned away"
            );
            state.ledger.record_turned_away(self.id);
            return Outcome::TurnedAway;
        }

        // Задержка имитирует внешнее подтверждение бронирования
        let delay_ms =
            rng.gen_range(scenario.confirm_delay_min_ms..=scenario.confirm_delay_max_ms);

        let outcome = tokio::select! {
            _ = sleep(Duration::from_millis(delay_ms)) => Outcome::Confirmed,
            _ = shutdown.changed() => {
                // Прерывание не отменяет бронь: места уже заняты.
                warn!(
                    customer = self.id,
                    "interrupted during confirmation, recording the reservation anyway"
                );
                Outcome::Interrupted
            }
        };

        state.ledger.record_confirmed(Confirmation {
            customer_id: self.id,
            theatre: theatre.number(),
            seat_numbers,
        });

        outcome
    }
}
