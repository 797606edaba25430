//! Evaluation functions
//!
//! A descriptor bundling a metric function with the metadata a training
//! loop needs to report it.
use crate::metrics::{
    accuracy_score, average_precision_score, balanced_accuracy_score, f1_score, log_loss, precision_score,
    recall_score, roc_auc_score, MetricFn,
};
use std::borrow::Cow;
use std::fmt;

/// A named metric and how to call it.
#[derive(Clone)]
pub struct EvalFunction {
    /// Name reported next to the value, expected to be unique per callback.
    pub name: Cow<'static, str>,
    /// Metric taking `(y_true, y_pred)`.
    pub function: MetricFn,
    /// Orientation of the score, used for early stopping only.
    pub is_higher_better: bool,
    /// Pass 0/1 predictions instead of scores to `function`.
    pub needs_binary_predictions: bool,
}

impl EvalFunction {
    /// Create an evaluation function with a runtime name.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        function: MetricFn,
        is_higher_better: bool,
        needs_binary_predictions: bool,
    ) -> Self {
        EvalFunction {
            name: name.into(),
            function,
            is_higher_better,
            needs_binary_predictions,
        }
    }

    const fn predefined(
        name: &'static str,
        function: MetricFn,
        is_higher_better: bool,
        needs_binary_predictions: bool,
    ) -> Self {
        EvalFunction {
            name: Cow::Borrowed(name),
            function,
            is_higher_better,
            needs_binary_predictions,
        }
    }
}

impl fmt::Debug for EvalFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EvalFunction")
            .field("name", &self.name)
            .field("is_higher_better", &self.is_higher_better)
            .field("needs_binary_predictions", &self.needs_binary_predictions)
            .finish_non_exhaustive()
    }
}

pub const LGBM_ACCURACY_SCORE: EvalFunction = EvalFunction::predefined("accuracy", accuracy_score, true, true);
pub const LGBM_BALANCED_ACCURACY_SCORE: EvalFunction =
    EvalFunction::predefined("balanced_accuracy", balanced_accuracy_score, true, true);
pub const LGBM_PRECISION_SCORE: EvalFunction = EvalFunction::predefined("precision", precision_score, true, true);
pub const LGBM_RECALL_SCORE: EvalFunction = EvalFunction::predefined("recall", recall_score, true, true);
pub const LGBM_F1_SCORE: EvalFunction = EvalFunction::predefined("f1", f1_score, true, true);
pub const LGBM_AVERAGE_PRECISION_SCORE: EvalFunction =
    EvalFunction::predefined("average_precision", average_precision_score, true, false);
pub const LGBM_ROC_AUC_SCORE: EvalFunction = EvalFunction::predefined("roc_auc", roc_auc_score, true, false);
pub const LGBM_LOG_LOSS: EvalFunction = EvalFunction::predefined("log_loss", log_loss, false, false);
