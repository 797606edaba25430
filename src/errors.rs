//! Errors
//!
//! Custom error types used throughout the `boost_eval` crate.
use thiserror::Error;

/// Errors raised by a metric function.
///
/// The evaluation callback returns these unchanged, so a broken metric
/// aborts the round instead of being skipped.
#[derive(Debug, Error, PartialEq)]
pub enum MetricError {
    /// Labels and predictions are not aligned.
    #[error("Labels have length {0}, but predictions have length {1}.")]
    LengthMismatch(usize, usize),
    /// Nothing to evaluate.
    #[error("Unable to compute metric on empty input.")]
    EmptyInput,
    /// A binary metric received a value outside of {{0, 1}}.
    #[error("The value {0} was found in {1}, expected binary values 0 or 1.")]
    InvalidLabel(f64, String),
    /// The metric has no defined value for the given input.
    #[error("Metric {0} is not defined: {1}")]
    UndefinedMetric(String, String),
}

/// Errors raised while configuring evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// Unable to read a configuration.
    #[error("Unable to read configuration: {0}")]
    UnableToRead(String),
    /// Unable to write evaluation output.
    #[error("Unable to write evaluation output: {0}")]
    UnableToWrite(String),
}
