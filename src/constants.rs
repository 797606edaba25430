pub const STOPPING_ROUNDS: usize = 3;
pub const LOG_LOSS_EPS: f64 = f64::EPSILON;
