//! Core simulation primitives
//!
//! Currently holds day-range management. See `days.rs`.

pub mod days;

pub use days::DaySpan;
