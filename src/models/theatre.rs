use std::sync::Mutex;
use tracing::debug;

use super::Seat;

/// Independent allocation domain owning a fixed, ordered pool of seats
/// numbered 1..=seat_count.
#[derive(Debug)]
pub struct Theatre {
    number: u32,
    seats: Vec<Seat>,
    // Held across a whole block attempt: no caller can observe a
    // half-completed grab or another caller's mid-rollback state.
    guard: Mutex<()>,
}

impl Theatre {
    pub fn new(number: u32, seat_count: u32) -> Self {
        Self {
            number,
            seats: (1..=seat_count).map(Seat::new).collect(),
            guard: Mutex::new(()),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn free_seats(&self) -> usize {
        self.seats.iter().filter(|seat| !seat.is_reserved()).count()
    }

    /// Reserves exactly `count` seats or none. Returns the assigned seat
    /// numbers in ascending order, or an empty vec when the whole request
    /// cannot be satisfied. An unsatisfiable request is data, not an error.
    pub fn reserve_block(&self, count: usize) -> Vec<u32> {
        if count == 0 || count > self.seats.len() {
            debug!(theatre = self.number, requested = count, "request out of range");
            return Vec::new();
        }

        let _guard = self.guard.lock().unwrap();

        let mut taken: Vec<&Seat> = Vec::with_capacity(count);
        // Lowest-numbered free seats first: deterministic and tightly packed.
        for seat in &self.seats {
            if !seat.try_reserve() {
                continue;
            }
            taken.push(seat);
            if taken.len() == count {
                break;
            }
        }

        if taken.len() < count {
            // Roll the partial grab back before anyone can see it.
            for seat in &taken {
                seat.release();
            }
            debug!(
                theatre = self.number,
                requested = count,
                "not enough free seats"
            );
            return Vec::new();
        }

        taken.iter().map(|seat| seat.number()).collect()
    }
}
