//! Metrics
//!
//! Binary classification metrics with the `(y_true, y_pred)` calling
//! convention shared by every evaluation function.
pub mod classification;
pub mod evaluation;
pub mod ranking;

pub use classification::{
    accuracy_score, balanced_accuracy_score, f1_score, log_loss, precision_score, recall_score, ConfusionCounts,
};
pub use evaluation::{is_comparison_better, Metric, MetricFn};
pub use ranking::{average_precision_score, roc_auc_score};
