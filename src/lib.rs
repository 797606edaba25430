// Modules
pub mod callback;
pub mod config;
pub mod constants;
pub mod data;
pub mod errors;
pub mod eval_function;
pub mod history;
pub mod metrics;
pub mod utils;

// Individual classes, and functions
pub use callback::{binary_eval_callback_factory, BinaryEvalCallback, EvalResult};
pub use config::EvalConfig;
pub use data::{Dataset, LabeledDataset, Matrix};
pub use errors::{EvalError, MetricError};
pub use eval_function::EvalFunction;
pub use history::{EarlyStopping, EvalHistory};
pub use metrics::Metric;
