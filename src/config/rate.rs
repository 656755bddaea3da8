use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the initial word rate.
pub const RATE_ENV_VAR: &str = "RQ_RATE";

/// Words per minute used when `RQ_RATE` is unset or invalid (2 Hz).
pub const DEFAULT_RATE: u32 = 120;

/// Step applied by the rate increment and decrement keys, in words per minute.
pub const RATE_DELTA: u32 = 10;

const MICROS_PER_MINUTE: u64 = 60_000_000;

/// Unit suffixes and the factor converting them to words per minute.
const UNITS: &[(&str, u32)] = &[
    ("wpm", 1),
    ("w/m", 1),
    ("/m", 1),
    ("wpmin", 1),
    ("w/min", 1),
    ("/min", 1),
    ("wps", 60),
    ("w/s", 60),
    ("/s", 60),
    ("wpsec", 60),
    ("w/sec", 60),
    ("/sec", 60),
    ("hz", 60),
];

/// Errors that can occur when parsing a word rate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateError {
    #[error("rate is empty")]
    Empty,

    #[error("rate '{0}' does not start with a digit")]
    NotANumber(String),

    #[error("rate must be positive")]
    NotPositive,

    #[error("rate '{0}' is too large")]
    TooLarge(String),

    #[error("unknown rate unit '{0}'")]
    UnknownUnit(String),
}

/// Display rate in words per minute. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WordRate(u32);

impl WordRate {
    /// Clamps to at least one word per minute.
    pub fn new(words_per_minute: u32) -> Self {
        Self(words_per_minute.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Read `RQ_RATE`, falling back to [`DEFAULT_RATE`] when it is unset or
    /// cannot be parsed.
    pub fn from_env() -> Self {
        match std::env::var(RATE_ENV_VAR) {
            Ok(value) => Self::parse_or_default(&value),
            Err(std::env::VarError::NotPresent) => Self::default(),
            Err(err) => {
                tracing::warn!("Ignoring {}: {}", RATE_ENV_VAR, err);
                Self::default()
            }
        }
    }

    pub fn parse_or_default(value: &str) -> Self {
        match parse_rate(value) {
            Ok(rate) => rate,
            Err(RateError::Empty) => Self::default(),
            Err(err) => {
                tracing::warn!(
                    "Ignoring {}={:?}: {}; using {} wpm",
                    RATE_ENV_VAR,
                    value,
                    err,
                    DEFAULT_RATE
                );
                Self::default()
            }
        }
    }

    pub fn faster(self) -> Self {
        Self(self.0.saturating_add(RATE_DELTA))
    }

    /// Slows down by [`RATE_DELTA`], stopping at one word per minute.
    pub fn slower(self) -> Self {
        Self::new(self.0.saturating_sub(RATE_DELTA))
    }

    /// Time each word stays on screen: `60_000_000 / rate` microseconds,
    /// truncated.
    pub fn interval(self) -> Duration {
        let micros = MICROS_PER_MINUTE / u64::from(self.0);
        Duration::new(micros / 1_000_000, ((micros % 1_000_000) * 1_000) as u32)
    }
}

impl Default for WordRate {
    fn default() -> Self {
        Self(DEFAULT_RATE)
    }
}

impl fmt::Display for WordRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wpm", self.get())
    }
}

/// Parse a rate such as `150`, `90 wpm` or `2hz`.
///
/// The value must start with a digit. Spaces may separate the number from
/// the unit; units are matched case-insensitively and a missing unit means
/// words per minute.
pub fn parse_rate(value: &str) -> Result<WordRate, RateError> {
    if value.is_empty() {
        return Err(RateError::Empty);
    }

    let digits_end = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    if digits_end == 0 {
        return Err(RateError::NotANumber(value.to_string()));
    }

    let number: u32 = value[..digits_end]
        .parse()
        .map_err(|_| RateError::TooLarge(value.to_string()))?;
    if number == 0 {
        return Err(RateError::NotPositive);
    }

    let unit = value[digits_end..].trim_start_matches(' ');
    let factor = if unit.is_empty() {
        1
    } else {
        UNITS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(unit))
            .map(|&(_, factor)| factor)
            .ok_or_else(|| RateError::UnknownUnit(unit.to_string()))?
    };

    number
        .checked_mul(factor)
        .map(WordRate)
        .ok_or_else(|| RateError::TooLarge(value.to_string()))
}
