use std::sync::Mutex;

use crate::models::Confirmation;

/// The two shared result sinks. Each is append-only behind its own lock;
/// insertion order is the order in which appends won the lock.
#[derive(Debug, Default)]
pub struct BookingLedger {
    confirmed: Mutex<Vec<Confirmation>>,
    turned_away: Mutex<Vec<u32>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_confirmed(&self, confirmation: Confirmation) {
        self.confirmed.lock().unwrap().push(confirmation);
    }

    pub fn record_turned_away(&self, customer_id: u32) {
        self.turned_away.lock().unwrap().push(customer_id);
    }

    /// Confirmations in insertion order. Clones under the lock so a
    /// straggler still running after the deadline cannot race the report.
    pub fn confirmations(&self) -> Vec<Confirmation> {
        self.confirmed.lock().unwrap().clone()
    }

    /// Turned-away customer IDs in insertion order.
    pub fn rejections(&self) -> Vec<u32> {
        self.turned_away.lock().unwrap().clone()
    }

    pub fn confirmed_count(&self) -> usize {
        self.confirmed.lock().unwrap().len()
    }

    pub fn turned_away_count(&self) -> usize {
        self.turned_away.lock().unwrap().len()
    }
}
