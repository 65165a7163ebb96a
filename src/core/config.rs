/// Tolerance used by `almost_eq()` and other approximate comparisons.
pub const EPSILON: f32 = 1e-5;
/// File that [`setup_log()`](crate::util::setup_log) writes to, relative to the working directory.
pub const LOG_FILE: &str = "run.log";
