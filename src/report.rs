use crate::models::Confirmation;

/// Renders the final report exactly as it is printed: one line per
/// confirmation in completion order, then a single turned-away line when
/// any customer went home empty-handed.
pub fn render(confirmations: &[Confirmation], rejections: &[u32]) -> String {
    let mut out = String::new();
    for confirmation in confirmations {
        out.push_str(&confirmation.to_string());
        out.push('\n');
    }
    if !rejections.is_empty() {
        let ids = rejections
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str("Customers unable to reserve seats: ");
        out.push_str(&ids);
        out.push('\n');
    }
    out
}
