//! Runtime configuration.
//!
//! There is no configuration file: the word rate comes from the `RQ_RATE`
//! environment variable and everything else from the command line.

mod rate;

pub use rate::{parse_rate, RateError, WordRate, DEFAULT_RATE, RATE_DELTA, RATE_ENV_VAR};
