use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
/// Future: could become a newtype with validation (non-negative)
pub type Price = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Identifier for a tracked asset (e.g. "bitcoin", "ethereum")
pub type AssetId = String;
