pub mod config;
pub mod ledger;
pub mod models;
pub mod report;
pub mod services;
pub mod sim;

// Shared state для всего приложения: театры и общий журнал бронирований
pub struct SimState {
    pub theatres: Vec<models::Theatre>,
    pub ledger: ledger::BookingLedger,
    pub config: config::Config,
}
