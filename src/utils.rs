use crate::errors::MetricError;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

pub fn fmt_vec_output(v: &[f64]) -> String {
    let mut res = String::new();
    if let Some(last) = v.len().checked_sub(1) {
        if last == 0 {
            return format!("{:.4}", v[0]);
        }
        for n in &v[..last] {
            res.push_str(format!("{:.4}", n).as_str());
            res.push_str(", ");
        }
        res.push_str(format!("{:.4}", &v[last]).as_str());
    }
    res
}

pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

/// Round each score to the nearest of 0 and 1.
///
/// Ties go to the even value, so exactly 0.5 becomes 0. Scores outside
/// of [0, 1] land on the closer bound, NaN stays NaN.
pub fn binarize(y_pred: &[f64]) -> Vec<f64> {
    y_pred.iter().map(|p| p.round_ties_even().clamp(0.0, 1.0)).collect()
}

// Validation
pub fn validate_lengths(y: &[f64], yhat: &[f64]) -> Result<(), MetricError> {
    if y.len() != yhat.len() {
        Err(MetricError::LengthMismatch(y.len(), yhat.len()))
    } else if y.is_empty() {
        Err(MetricError::EmptyInput)
    } else {
        Ok(())
    }
}

pub fn validate_binary(values: &[f64], what: &str) -> Result<(), MetricError> {
    match values.iter().find(|v| **v != 0.0 && **v != 1.0) {
        Some(v) => Err(MetricError::InvalidLabel(*v, what.to_string())),
        None => Ok(()),
    }
}
