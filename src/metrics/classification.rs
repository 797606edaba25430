use crate::constants::LOG_LOSS_EPS;
use crate::errors::MetricError;
use crate::utils::{validate_binary, validate_lengths};
use log::warn;

/// Counts of a binary confusion matrix, positive class is 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// Count outcomes of 0/1 predictions against 0/1 labels.
    pub fn from_predictions(y: &[f64], yhat: &[f64]) -> Result<Self, MetricError> {
        validate_lengths(y, yhat)?;
        validate_binary(y, "y_true")?;
        validate_binary(yhat, "y_pred")?;
        let mut counts = ConfusionCounts::default();
        for (y_, yhat_) in y.iter().zip(yhat) {
            match (*y_ == 1.0, *yhat_ == 1.0) {
                (true, true) => counts.true_positives += 1,
                (false, true) => counts.false_positives += 1,
                (false, false) => counts.true_negatives += 1,
                (true, false) => counts.false_negatives += 1,
            }
        }
        Ok(counts)
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }
}

fn zero_division(numerator: usize, denominator: usize, metric: &str) -> f64 {
    if denominator == 0 {
        warn!("{} is ill-defined due to a zero denominator, setting it to 0.0.", metric);
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

pub fn accuracy_score(y: &[f64], yhat: &[f64]) -> Result<f64, MetricError> {
    let c = ConfusionCounts::from_predictions(y, yhat)?;
    Ok((c.true_positives + c.true_negatives) as f64 / c.total() as f64)
}

/// Mean recall over the classes present in `y`.
pub fn balanced_accuracy_score(y: &[f64], yhat: &[f64]) -> Result<f64, MetricError> {
    let c = ConfusionCounts::from_predictions(y, yhat)?;
    let recalls = [
        (c.true_positives, c.true_positives + c.false_negatives),
        (c.true_negatives, c.true_negatives + c.false_positives),
    ];
    let (sum, n) = recalls
        .iter()
        .filter(|(_, support)| *support > 0)
        .fold((0.0, 0), |(s, n), (hit, support)| (s + *hit as f64 / *support as f64, n + 1));
    if n < 2 {
        warn!("y_true contains a single class, balanced accuracy reduces to its recall.");
    }
    Ok(sum / n as f64)
}

pub fn precision_score(y: &[f64], yhat: &[f64]) -> Result<f64, MetricError> {
    let c = ConfusionCounts::from_predictions(y, yhat)?;
    Ok(zero_division(
        c.true_positives,
        c.true_positives + c.false_positives,
        "Precision",
    ))
}

pub fn recall_score(y: &[f64], yhat: &[f64]) -> Result<f64, MetricError> {
    let c = ConfusionCounts::from_predictions(y, yhat)?;
    Ok(zero_division(
        c.true_positives,
        c.true_positives + c.false_negatives,
        "Recall",
    ))
}

pub fn f1_score(y: &[f64], yhat: &[f64]) -> Result<f64, MetricError> {
    let c = ConfusionCounts::from_predictions(y, yhat)?;
    Ok(zero_division(
        2 * c.true_positives,
        2 * c.true_positives + c.false_positives + c.false_negatives,
        "F-score",
    ))
}

/// Mean binary cross entropy of probabilities `yhat`.
pub fn log_loss(y: &[f64], yhat: &[f64]) -> Result<f64, MetricError> {
    validate_lengths(y, yhat)?;
    validate_binary(y, "y_true")?;
    let res = y
        .iter()
        .zip(yhat)
        .map(|(y_, yhat_)| {
            let p = yhat_.clamp(LOG_LOSS_EPS, 1.0 - LOG_LOSS_EPS);
            -(*y_ * p.ln() + (1.0 - *y_) * (1.0 - p).ln())
        })
        .sum::<f64>();
    Ok(res / y.len() as f64)
}
