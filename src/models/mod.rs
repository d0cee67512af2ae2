pub mod booking;
pub mod seat;
pub mod theatre;

pub use booking::Confirmation;
pub use seat::Seat;
pub use theatre::Theatre;
