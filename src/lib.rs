//! Terminal calendar that prints 1 to 12 month grids side by side.
//!
//! Features:
//! - Self-contained day-of-week and week-number arithmetic
//! - Single month, month range and whole year views
//! - Optional week numbers
//! - Pluggable highlighting of the current day

pub mod args;
pub mod calendar;
pub mod emphasis;
pub mod error;
pub mod formatter;
pub mod resolver;
pub mod types;
