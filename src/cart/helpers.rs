//! Shopping Cart Helpers
//!
//! Small pure functions shared across the cart module: identifier generation
//! and item summary formatting.

use uuid::Uuid;

use super::models::CartItem;

/// Produces a fresh process-unique identifier.
///
/// Identifiers are opaque to the rest of the crate; the only contract is
/// uniqueness across the process lifetime. Currently a simple-format UUID v4,
/// swappable without touching cart logic.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"Book ($12.50), Pen ($1.50)"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} (${:.2})", item.name, item.price))
        .collect::<Vec<_>>()
        .join(", ")
}
