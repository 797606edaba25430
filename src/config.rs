//! Configuration
//!
//! Which predefined metrics to report, and how patient early stopping is.
use crate::callback::{binary_eval_callback_factory, BinaryEvalCallback};
use crate::constants::STOPPING_ROUNDS;
use crate::errors::EvalError;
use crate::history::EarlyStopping;
use crate::metrics::Metric;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub early_stopping_rounds: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            metrics: vec![Metric::F1, Metric::Accuracy, Metric::AveragePrecision],
            early_stopping_rounds: None,
        }
    }
}

impl EvalConfig {
    pub fn new(metrics: Vec<Metric>) -> Self {
        EvalConfig {
            metrics,
            early_stopping_rounds: None,
        }
    }

    /// Set the number of rounds without improvement before stopping.
    pub fn set_early_stopping_rounds(mut self, early_stopping_rounds: Option<usize>) -> Self {
        self.early_stopping_rounds = early_stopping_rounds;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, EvalError> {
        serde_json::from_str(json).map_err(|e| EvalError::UnableToRead(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, EvalError> {
        serde_json::to_string(self).map_err(|e| EvalError::UnableToWrite(e.to_string()))
    }

    /// Parse a comma separated list of metric names, such as `"f1,accuracy"`.
    pub fn from_metric_names(names: &str) -> Result<Self, EvalError> {
        let metrics = names
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Metric::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EvalConfig::new(metrics))
    }

    pub fn build_callback(&self) -> BinaryEvalCallback {
        binary_eval_callback_factory(self.metrics.iter().map(|m| m.eval_function()).collect())
    }

    pub fn build_early_stopping(&self) -> EarlyStopping {
        EarlyStopping::new(self.early_stopping_rounds.unwrap_or(STOPPING_ROUNDS))
    }
}
