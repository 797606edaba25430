//! History
//!
//! Bookkeeping of the values a callback reports across rounds, and an
//! early stopping monitor driven by the reported orientation.
use crate::callback::EvalResult;
use crate::constants::STOPPING_ROUNDS;
use crate::errors::EvalError;
use crate::metrics::is_comparison_better;
use crate::utils::fmt_vec_output;
use hashbrown::HashMap;
use log::{debug, info, warn};
use serde_json::{Map, Value};

/// Entries keyed by name, iterated in the order names were first seen.
#[derive(Debug, Clone)]
struct NamedSeries<V> {
    names: Vec<String>,
    entries: Vec<V>,
    index: HashMap<String, usize>,
}

impl<V> Default for NamedSeries<V> {
    fn default() -> Self {
        NamedSeries {
            names: Vec::new(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> NamedSeries<V> {
    fn get(&self, name: &str) -> Option<&V> {
        self.index.get(name).map(|i| &self.entries[*i])
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.names.iter().map(|n| n.as_str()).zip(&self.entries)
    }
}

impl<V: Default> NamedSeries<V> {
    fn entry(&mut self, name: &str) -> &mut V {
        let i = match self.index.get(name) {
            Some(i) => *i,
            None => {
                let i = self.entries.len();
                self.names.push(name.to_string());
                self.entries.push(V::default());
                self.index.insert(name.to_string(), i);
                i
            }
        };
        &mut self.entries[i]
    }
}

fn unreadable(msg: &str) -> EvalError {
    EvalError::UnableToRead(msg.to_string())
}

/// Values of every metric, for every evaluated dataset, one per round.
///
/// Datasets and metrics keep the order they were first recorded in.
#[derive(Debug, Clone, Default)]
pub struct EvalHistory {
    results: NamedSeries<NamedSeries<Vec<f64>>>,
}

impl EvalHistory {
    pub fn new() -> Self {
        EvalHistory::default()
    }

    /// Append the results of one round on `dataset_name`.
    pub fn record(&mut self, dataset_name: &str, round_results: &[EvalResult]) {
        let metrics = self.results.entry(dataset_name);
        for r in round_results {
            metrics.entry(&r.name).push(r.value);
        }
        let values: Vec<f64> = round_results.iter().map(|r| r.value).collect();
        debug!("{}: [{}]", dataset_name, fmt_vec_output(&values));
    }

    /// Series of `metric_name` on `dataset_name`.
    pub fn get(&self, dataset_name: &str, metric_name: &str) -> Option<&[f64]> {
        self.results
            .get(dataset_name)
            .and_then(|m| m.get(metric_name))
            .map(|v| v.as_slice())
    }

    /// Number of rounds recorded for `dataset_name`.
    pub fn n_rounds(&self, dataset_name: &str) -> usize {
        self.results
            .get(dataset_name)
            .and_then(|m| m.iter().map(|(_, v)| v.len()).max())
            .unwrap_or(0)
    }

    pub fn datasets(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|(name, _)| name)
    }

    /// Metric names recorded on `dataset_name`, in reporting order.
    pub fn metrics(&self, dataset_name: &str) -> Vec<&str> {
        self.results
            .get(dataset_name)
            .map(|m| m.iter().map(|(name, _)| name).collect())
            .unwrap_or_default()
    }

    /// Nested `{dataset: {metric: [values]}}` object, non finite values become `null`.
    pub fn to_json(&self) -> Result<String, EvalError> {
        let mut datasets = Map::new();
        for (dataset_name, metrics) in self.results.iter() {
            let mut series = Map::new();
            for (metric_name, values) in metrics.iter() {
                series.insert(metric_name.to_string(), Value::from(values.clone()));
            }
            datasets.insert(dataset_name.to_string(), Value::Object(series));
        }
        serde_json::to_string(&Value::Object(datasets)).map_err(|e| EvalError::UnableToWrite(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, EvalError> {
        let value: Value = serde_json::from_str(json).map_err(|e| EvalError::UnableToRead(e.to_string()))?;
        let datasets = value
            .as_object()
            .ok_or_else(|| unreadable("expected an object of datasets"))?;
        let mut history = EvalHistory::new();
        for (dataset_name, metrics) in datasets {
            let metrics = metrics
                .as_object()
                .ok_or_else(|| unreadable("expected an object of metrics"))?;
            let series = history.results.entry(dataset_name);
            for (metric_name, values) in metrics {
                let values = values
                    .as_array()
                    .ok_or_else(|| unreadable("expected an array of metric values"))?
                    .iter()
                    .map(|v| match v {
                        Value::Null => Ok(f64::NAN),
                        _ => v.as_f64().ok_or_else(|| unreadable("expected a numeric metric value")),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                series.entry(metric_name).extend(values);
            }
        }
        Ok(history)
    }
}

/// Stops training once the first reported metric has not improved
/// for `patience` rounds.
#[derive(Debug, Clone)]
pub struct EarlyStopping {
    patience: usize,
    best_value: f64,
    best_round: usize,
    current_round: usize,
    metric_name: Option<String>,
}

impl Default for EarlyStopping {
    fn default() -> Self {
        EarlyStopping::new(STOPPING_ROUNDS)
    }
}

impl EarlyStopping {
    pub fn new(patience: usize) -> Self {
        EarlyStopping {
            patience,
            best_value: f64::NAN,
            best_round: 0,
            current_round: 0,
            metric_name: None,
        }
    }

    /// Feed the results of a round, returns `true` when training should stop.
    ///
    /// The metric watched is the first one reported, later rounds are
    /// matched by name. Rounds not reporting it only advance the round counter.
    pub fn update(&mut self, round_results: &[EvalResult]) -> bool {
        let round = self.current_round;
        self.current_round += 1;
        let first_seen = self.metric_name.is_none();
        let metric_name = match (&self.metric_name, round_results.first()) {
            (Some(name), _) => name.clone(),
            (None, Some(first)) => first.name.clone(),
            (None, None) => return false,
        };
        let Some(result) = round_results.iter().find(|r| r.name == metric_name) else {
            warn!("Round {} did not report {}, skipping it for early stopping.", round, metric_name);
            return false;
        };
        if first_seen {
            self.metric_name = Some(metric_name);
        }
        if first_seen || is_comparison_better(self.best_value, result.value, result.is_higher_better) {
            self.best_value = result.value;
            self.best_round = round;
        }
        let stop = round - self.best_round >= self.patience;
        if stop {
            info!(
                "Early stopping at round {}, best {} is {:.6} at round {}.",
                round,
                result.name,
                self.best_value,
                self.best_round
            );
        }
        stop
    }

    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    pub fn best_round(&self) -> usize {
        self.best_round
    }

    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    pub fn reset(&mut self) {
        *self = EarlyStopping::new(self.patience);
    }
}
