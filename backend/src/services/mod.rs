//! Business logic services
//!
//! Services wrap the shared engine with logging and metrics.

pub mod calculator;

pub use calculator::{CalculatorService, Channel};
