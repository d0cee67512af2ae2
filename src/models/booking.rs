use std::fmt;

/// Confirmed reservation: one customer, one theatre, the seats they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub customer_id: u32,
    pub theatre: u32,
    pub seat_numbers: Vec<u32>,
}

impl fmt::Display for Confirmation {
    // Rendered exactly as the report prints it, e.g.
    // `Customer  7 successfully reserved Seat No. 3, 4, 5 in Theatre 2`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seats = self
            .seat_numbers
            .iter()
            .map(|number| number.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Customer {:>2} successfully reserved Seat No. {} in Theatre {}",
            self.customer_id, seats, self.theatre
        )
    }
}
