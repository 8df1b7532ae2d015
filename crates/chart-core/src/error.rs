// File: crates/chart-core/src/error.rs
// Summary: Error type for fallible series construction.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("value for '{label}' is not finite: {value}")]
    NonFiniteValue { label: String, value: f64 },
}
