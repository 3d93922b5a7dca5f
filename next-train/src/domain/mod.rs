//! Domain types for the next-train query.
//!
//! Types here enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod time;

pub use time::{ClockTime, TimeError};
