use crate::errors::{EvalError, MetricError};
use crate::eval_function::{
    EvalFunction, LGBM_ACCURACY_SCORE, LGBM_AVERAGE_PRECISION_SCORE, LGBM_BALANCED_ACCURACY_SCORE, LGBM_F1_SCORE,
    LGBM_LOG_LOSS, LGBM_PRECISION_SCORE, LGBM_RECALL_SCORE, LGBM_ROC_AUC_SCORE,
};
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type MetricFn = fn(&[f64], &[f64]) -> Result<f64, MetricError>;

/// Compare to metric values, determining if b is better.
/// If one of them is NaN favor the non NaN value.
/// If both are NaN, consider the first value to be better.
pub fn is_comparison_better(value: f64, comparison: f64, maximize: bool) -> bool {
    match (value.is_nan(), comparison.is_nan()) {
        // Both nan, comparison is not better,
        // Or comparison is nan, also not better
        (true, true) | (false, true) => false,
        // comparison is not Nan, it's better
        (true, false) => true,
        // Perform numerical comparison.
        (false, false) => {
            if maximize {
                value < comparison
            } else {
                value > comparison
            }
        }
    }
}

/// Metrics with a predefined evaluation function.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Accuracy,
    BalancedAccuracy,
    Precision,
    Recall,
    F1,
    AveragePrecision,
    RocAuc,
    LogLoss,
}

const METRIC_NAMES: [&str; 8] = [
    "accuracy",
    "balanced_accuracy",
    "precision",
    "recall",
    "f1",
    "average_precision",
    "roc_auc",
    "log_loss",
];

impl Metric {
    /// The predefined evaluation function of this metric.
    pub fn eval_function(&self) -> EvalFunction {
        match self {
            Metric::Accuracy => LGBM_ACCURACY_SCORE,
            Metric::BalancedAccuracy => LGBM_BALANCED_ACCURACY_SCORE,
            Metric::Precision => LGBM_PRECISION_SCORE,
            Metric::Recall => LGBM_RECALL_SCORE,
            Metric::F1 => LGBM_F1_SCORE,
            Metric::AveragePrecision => LGBM_AVERAGE_PRECISION_SCORE,
            Metric::RocAuc => LGBM_ROC_AUC_SCORE,
            Metric::LogLoss => LGBM_LOG_LOSS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Accuracy => METRIC_NAMES[0],
            Metric::BalancedAccuracy => METRIC_NAMES[1],
            Metric::Precision => METRIC_NAMES[2],
            Metric::Recall => METRIC_NAMES[3],
            Metric::F1 => METRIC_NAMES[4],
            Metric::AveragePrecision => METRIC_NAMES[5],
            Metric::RocAuc => METRIC_NAMES[6],
            Metric::LogLoss => METRIC_NAMES[7],
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Metric {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accuracy" => Ok(Metric::Accuracy),
            "balanced_accuracy" => Ok(Metric::BalancedAccuracy),
            "precision" => Ok(Metric::Precision),
            "recall" => Ok(Metric::Recall),
            "f1" => Ok(Metric::F1),
            "average_precision" => Ok(Metric::AveragePrecision),
            "roc_auc" => Ok(Metric::RocAuc),
            "log_loss" => Ok(Metric::LogLoss),

            _ => Err(EvalError::ParseString(
                s.to_string(),
                "Metric".to_string(),
                items_to_strings(METRIC_NAMES.to_vec()),
            )),
        }
    }
}
