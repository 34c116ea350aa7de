//! General-purpose helpers used by the shell.

pub mod formatting;
pub mod ids;

// Re-export commonly used functions
pub use formatting::{capitalize, format_date, format_date_str, format_number, truncate, DateStyle};
pub use ids::generate_id;
