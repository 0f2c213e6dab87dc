//! Core business logic - framework-agnostic catalog, delivery, and order handling.

/// Products and categories
pub mod catalog;
/// Delivery details and partner assignment
pub mod delivery;
/// Order lines, totals, and the order summary
pub mod order;
/// Currency and menu formatting
pub mod report;
