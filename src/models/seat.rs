use std::sync::atomic::{AtomicBool, Ordering};

/// Single seat in a theatre hall. The atomic flag makes the seat the unit
/// of atomicity: reserve and release need no outer lock to be safe.
#[derive(Debug)]
pub struct Seat {
    number: u32,
    reserved: AtomicBool,
}

impl Seat {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            reserved: AtomicBool::new(false),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Attempts to claim the seat. A `false` return means the seat was
    /// already taken; that is a normal outcome, not an error.
    pub fn try_reserve(&self) -> bool {
        self.reserved
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Frees the seat unconditionally. Idempotent. Only the owning theatre
    /// calls this, to roll back a partial block grab.
    pub fn release(&self) {
        self.reserved.store(false, Ordering::Release);
    }

    pub fn is_reserved(&self) -> bool {
        self.reserved.load(Ordering::Acquire)
    }
}
