//! Evaluation callback
//!
//! Turns a list of [`EvalFunction`] into the single callback a boosting
//! loop invokes once per round with the current predictions.
use crate::data::{LabeledDataset, Matrix};
use crate::errors::MetricError;
use crate::eval_function::EvalFunction;
use crate::utils::binarize;
use serde::{Deserialize, Serialize};

/// One reported metric value of a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    pub name: String,
    pub value: f64,
    pub is_higher_better: bool,
}

impl From<EvalResult> for (String, f64, bool) {
    fn from(r: EvalResult) -> Self {
        (r.name, r.value, r.is_higher_better)
    }
}

/// Callback evaluating binary classification scores.
#[derive(Debug, Clone, Default)]
pub struct BinaryEvalCallback {
    eval_functions: Vec<EvalFunction>,
}

/// Build a callback evaluating `eval_functions` in order.
///
/// An empty list is accepted, the callback then reports nothing.
pub fn binary_eval_callback_factory(eval_functions: Vec<EvalFunction>) -> BinaryEvalCallback {
    BinaryEvalCallback { eval_functions }
}

impl BinaryEvalCallback {
    pub fn eval_functions(&self) -> &[EvalFunction] {
        &self.eval_functions
    }

    /// Evaluate positive class scores `y_pred` against the labels of `data`.
    ///
    /// Scores are rounded to 0/1 at most once, and only when a function
    /// needs them. The first metric error is returned as is.
    pub fn evaluate<D>(&self, y_pred: &[f64], data: &D) -> Result<Vec<EvalResult>, MetricError>
    where
        D: LabeledDataset + ?Sized,
    {
        let y_true = data.get_label();
        let mut y_pred_binary: Option<Vec<f64>> = None;
        let mut results = Vec::with_capacity(self.eval_functions.len());
        for eval_function in &self.eval_functions {
            let value = if eval_function.needs_binary_predictions {
                let binary = y_pred_binary.get_or_insert_with(|| binarize(y_pred));
                (eval_function.function)(y_true, binary)?
            } else {
                (eval_function.function)(y_true, y_pred)?
            };
            results.push(EvalResult {
                name: eval_function.name.to_string(),
                value,
                is_higher_better: eval_function.is_higher_better,
            });
        }
        Ok(results)
    }

    /// Evaluate predictions handed over as a matrix.
    ///
    /// # Panics
    ///
    /// If `y_pred` has more than one column.
    pub fn evaluate_matrix<D>(&self, y_pred: &Matrix<f64>, data: &D) -> Result<Vec<EvalResult>, MetricError>
    where
        D: LabeledDataset + ?Sized,
    {
        assert!(
            y_pred.ndim() == 1,
            "Binary evaluation expects one dimensional predictions, got {} columns.",
            y_pred.cols
        );
        self.evaluate(y_pred.get_col(0), data)
    }

    /// The callback as a plain closure, for loops taking a custom eval function.
    pub fn as_feval<D>(&self) -> impl Fn(&[f64], &D) -> Result<Vec<EvalResult>, MetricError> + '_
    where
        D: LabeledDataset + ?Sized,
    {
        move |y_pred: &[f64], data: &D| self.evaluate(y_pred, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::eval_function::{
        LGBM_ACCURACY_SCORE, LGBM_AVERAGE_PRECISION_SCORE, LGBM_BALANCED_ACCURACY_SCORE, LGBM_F1_SCORE,
        LGBM_LOG_LOSS, LGBM_ROC_AUC_SCORE,
    };
    use crate::metrics::{accuracy_score, average_precision_score, f1_score};
    use crate::utils::precision_round;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::Cell;

    fn sample() -> (Vec<f64>, Dataset) {
        (vec![0.2, 0.3, 0.3, 0.9], Dataset::new(vec![0., 0., 1., 1.]))
    }

    #[test]
    fn test_callback_accuracy() {
        let (y_pred, data) = sample();
        let callback = binary_eval_callback_factory(vec![LGBM_ACCURACY_SCORE]);
        let result = callback.evaluate(&y_pred, &data).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "accuracy");
        assert_eq!(result[0].value, 0.75);
        assert!(result[0].is_higher_better);
        assert_eq!(
            result[0].value,
            accuracy_score(data.get_label(), &binarize(&y_pred)).unwrap()
        );
    }

    #[test]
    fn test_callback_f1() {
        let (y_pred, data) = sample();
        let callback = binary_eval_callback_factory(vec![LGBM_F1_SCORE]);
        let result = callback.evaluate(&y_pred, &data).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "f1");
        assert_eq!(result[0].value, f1_score(&[0., 0., 1., 1.], &[0., 0., 0., 1.]).unwrap());
        assert!(result[0].is_higher_better);
    }

    #[test]
    fn test_callback_average_precision() {
        let (y_pred, data) = sample();
        let callback = binary_eval_callback_factory(vec![LGBM_AVERAGE_PRECISION_SCORE]);
        let result = callback.evaluate(&y_pred, &data).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "average_precision");
        assert_eq!(result[0].value, average_precision_score(data.get_label(), &y_pred).unwrap());
        assert_eq!(precision_round(result[0].value, 6), 0.833333);
        assert!(result[0].is_higher_better);
    }

    #[test]
    fn test_callback_preserves_order() {
        let (y_pred, data) = sample();
        let callback = binary_eval_callback_factory(vec![
            LGBM_F1_SCORE,
            LGBM_ACCURACY_SCORE,
            LGBM_AVERAGE_PRECISION_SCORE,
            LGBM_BALANCED_ACCURACY_SCORE,
            LGBM_LOG_LOSS,
        ]);
        let result = callback.evaluate(&y_pred, &data).unwrap();
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["f1", "accuracy", "average_precision", "balanced_accuracy", "log_loss"]
        );
        assert!(!result[4].is_higher_better);
        let tuple: (String, f64, bool) = result[1].clone().into();
        assert_eq!(tuple, ("accuracy".to_string(), 0.75, true));
    }

    #[test]
    fn test_callback_empty() {
        let (y_pred, data) = sample();
        let callback = binary_eval_callback_factory(Vec::new());
        assert!(callback.evaluate(&y_pred, &data).unwrap().is_empty());
    }

    thread_local! {
        static BINARY_CALLS: Cell<usize> = const { Cell::new(0) };
    }

    fn counting_accuracy(y: &[f64], yhat: &[f64]) -> Result<f64, MetricError> {
        BINARY_CALLS.with(|c| c.set(c.get() + 1));
        assert!(yhat.iter().all(|v| *v == 0.0 || *v == 1.0));
        accuracy_score(y, yhat)
    }

    fn expects_scores(_y: &[f64], yhat: &[f64]) -> Result<f64, MetricError> {
        assert_eq!(yhat, &[0.2, 0.3, 0.3, 0.9]);
        Ok(1.0)
    }

    #[test]
    fn test_callback_dispatch() {
        let (y_pred, data) = sample();
        let callback = binary_eval_callback_factory(vec![
            EvalFunction::new("scores", expects_scores, true, false),
            EvalFunction::new("first", counting_accuracy, true, true),
            EvalFunction::new("second", counting_accuracy, true, true),
        ]);
        let result = callback.evaluate(&y_pred, &data).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].value, result[2].value);
        assert_eq!(BINARY_CALLS.with(|c| c.get()), 2);
        assert_eq!(y_pred, vec![0.2, 0.3, 0.3, 0.9]);
    }

    #[test]
    fn test_callback_idempotent() {
        let mut rng = StdRng::seed_from_u64(0);
        let y_pred: Vec<f64> = (0..200).map(|_| rng.gen::<f64>()).collect();
        let label: Vec<f64> = (0..200).map(|i| (i % 3 == 0) as u8 as f64).collect();
        let callback = binary_eval_callback_factory(vec![
            LGBM_ACCURACY_SCORE,
            LGBM_ROC_AUC_SCORE,
            LGBM_F1_SCORE,
            LGBM_AVERAGE_PRECISION_SCORE,
        ]);
        let first = callback.evaluate(&y_pred, &label).unwrap();
        let second = callback.evaluate(&y_pred, &label).unwrap();
        assert_eq!(first, second);
        let binary = binarize(&y_pred);
        assert_eq!(first[0].value, accuracy_score(&label, &binary).unwrap());
        assert_eq!(first[2].value, f1_score(&label, &binary).unwrap());
        assert_eq!(first[3].value, average_precision_score(&label, &y_pred).unwrap());
    }

    #[test]
    fn test_callback_propagates_metric_error() {
        let y_pred = vec![0.2, 0.7];
        let data = Dataset::new(vec![1., 1.]);
        let callback = binary_eval_callback_factory(vec![LGBM_ACCURACY_SCORE, LGBM_ROC_AUC_SCORE]);
        let result = callback.evaluate(&y_pred, &data);
        assert_eq!(
            result,
            Err(MetricError::UndefinedMetric(
                "roc_auc".to_string(),
                "only one class present in y_true".to_string()
            ))
        );

        let data = Dataset::new(vec![1.]);
        let result = callback.evaluate(&y_pred, &data);
        assert_eq!(result, Err(MetricError::LengthMismatch(1, 2)));
    }

    #[test]
    fn test_callback_scores_out_of_range() {
        let data = Dataset::new(vec![0., 1.]);
        let callback = binary_eval_callback_factory(vec![LGBM_ACCURACY_SCORE, LGBM_F1_SCORE]);
        let result = callback.evaluate(&[-0.4, 1.6], &data).unwrap();
        assert_eq!(result[0].value, 1.0);
        assert_eq!(result[1].value, 1.0);
    }

    #[test]
    fn test_callback_matrix() {
        let (y_pred, data) = sample();
        let callback = binary_eval_callback_factory(vec![LGBM_ACCURACY_SCORE]);
        let m = Matrix::new(&y_pred, 4, 1);
        assert_eq!(callback.evaluate_matrix(&m, &data).unwrap()[0].value, 0.75);
    }

    #[test]
    #[should_panic]
    fn test_callback_rejects_two_dimensional() {
        let y_pred = vec![0.2, 0.3, 0.3, 0.9];
        let data = Dataset::new(vec![0., 1.]);
        let callback = binary_eval_callback_factory(vec![LGBM_ACCURACY_SCORE]);
        let m = Matrix::new(&y_pred, 2, 2);
        let _ = callback.evaluate_matrix(&m, &data);
    }

    #[test]
    fn test_as_feval() {
        let (y_pred, data) = sample();
        let callback = binary_eval_callback_factory(vec![LGBM_ACCURACY_SCORE, LGBM_F1_SCORE]);
        let feval = callback.as_feval::<Dataset>();
        let result = feval(&y_pred, &data).unwrap();
        assert_eq!(result, callback.evaluate(&y_pred, &data).unwrap());
    }
}
