use crate::errors::MetricError;
use crate::utils::{validate_binary, validate_lengths};
use log::warn;

/// Indices of `yhat` sorted by descending score.
fn descending_order(yhat: &[f64]) -> Vec<usize> {
    let mut indices = (0..yhat.len()).collect::<Vec<_>>();
    indices.sort_unstable_by(|&a, &b| yhat[b].total_cmp(&yhat[a]));
    indices
}

/// Area under the precision recall curve, as the precision weighted
/// mean of recall increments at every distinct score threshold.
///
/// No interpolation is applied between operating points.
pub fn average_precision_score(y: &[f64], yhat: &[f64]) -> Result<f64, MetricError> {
    validate_lengths(y, yhat)?;
    validate_binary(y, "y_true")?;
    let n_positive = y.iter().filter(|y_| **y_ == 1.0).count();
    if n_positive == 0 {
        warn!("No positive class found in y_true, average precision is set to 0.0.");
        return Ok(0.0);
    }

    let indices = descending_order(yhat);
    let mut tp = 0.0;
    let mut fp = 0.0;
    let mut recall_prev = 0.0;
    let mut ap = 0.0;
    for (pos, &i) in indices.iter().enumerate() {
        tp += y[i];
        fp += 1.0 - y[i];
        // Only close an operating point once all tied scores are counted.
        let at_threshold_end = indices.get(pos + 1).map_or(true, |&next| yhat[next] != yhat[i]);
        if at_threshold_end {
            let precision = tp / (tp + fp);
            let recall = tp / n_positive as f64;
            ap += (recall - recall_prev) * precision;
            recall_prev = recall;
        }
    }
    Ok(ap)
}

fn trapezoid_area(x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    (x0 - x1).abs() * (y0 + y1) * 0.5
}

/// Weighted area under the ROC curve, closing one trapezoid per
/// distinct score.
///
/// Callers check alignment and that both classes carry weight.
fn weighted_roc_auc(y: &[f64], yhat: &[f64], sample_weight: &[f64]) -> f64 {
    let indices = descending_order(yhat);
    let mut tp = 0.0;
    let mut fp = 0.0;
    let mut tp_prev = 0.0;
    let mut fp_prev = 0.0;
    let mut area = 0.0;
    for (pos, &i) in indices.iter().enumerate() {
        tp += y[i] * sample_weight[i];
        fp += (1.0 - y[i]) * sample_weight[i];
        let at_threshold_end = indices.get(pos + 1).map_or(true, |&next| yhat[next] != yhat[i]);
        if at_threshold_end {
            area += trapezoid_area(fp_prev, fp, tp_prev, tp);
            tp_prev = tp;
            fp_prev = fp;
        }
    }
    area / (tp * fp)
}

/// Area under the ROC curve.
///
/// A batch holding a single class has no defined AUC and yields
/// [`MetricError::UndefinedMetric`].
pub fn roc_auc_score(y: &[f64], yhat: &[f64]) -> Result<f64, MetricError> {
    validate_lengths(y, yhat)?;
    validate_binary(y, "y_true")?;
    let n_positive = y.iter().filter(|y_| **y_ == 1.0).count();
    if n_positive == 0 || n_positive == y.len() {
        return Err(MetricError::UndefinedMetric(
            "roc_auc".to_string(),
            "only one class present in y_true".to_string(),
        ));
    }
    let sample_weight = vec![1.0; y.len()];
    Ok(weighted_roc_auc(y, yhat, &sample_weight))
}
