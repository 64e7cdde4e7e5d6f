/// Calendar-to-distance conversion uses a flat 30-day month everywhere.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Same conversion for whole-day arithmetic.
pub const DAYS_PER_MONTH_I64: i64 = 30;

/// Daily distance assumed when a car has no usable average-usage figure.
pub const FALLBACK_DAILY_RATE_KM: f64 = 30.0;
