//! Window statistics - pure aggregates over a price window
//!
//! `compute` is a pure function over the supplied window; the caller is
//! expected to pass a fresh `HistoryStore` snapshot each time so the
//! result always reflects the latest history state.

use rust_decimal::Decimal;
use vigil_core::{Price, StatsSnapshot};

/// Derive aggregate statistics over a price window, oldest first.
///
/// Returns `None` below 2 entries - a single data point cannot express
/// a total change. `percent_change` is relative to the oldest retained
/// entry (the start of the sliding window, not the asset's all-time
/// first price) and is `None` when that entry is zero.
pub fn compute(window: &[Price]) -> Option<StatsSnapshot> {
    if window.len() < 2 {
        return None;
    }

    let first = window[0];
    let last = window[window.len() - 1];

    let total_change = last - first;
    let percent_change = total_change
        .checked_div(first)
        .map(|ratio| ratio * Decimal::ONE_HUNDRED);

    let mut max_price = first;
    let mut min_price = first;
    let mut sum = Decimal::ZERO;
    for &price in window {
        max_price = max_price.max(price);
        min_price = min_price.min(price);
        sum += price;
    }
    let avg_price = sum / Decimal::from(window.len());

    Some(StatsSnapshot {
        total_change,
        percent_change,
        max_price,
        min_price,
        avg_price,
        sample_count: window.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_stats_over_known_window() {
        let window = vec![dec!(100), dec!(150), dec!(90), dec!(120)];
        let stats = compute(&window).unwrap();

        assert_eq!(stats.total_change, dec!(20));
        assert_eq!(stats.percent_change, Some(dec!(20)));
        assert_eq!(stats.max_price, dec!(150));
        assert_eq!(stats.min_price, dec!(90));
        assert_eq!(stats.avg_price, dec!(115));
        assert_eq!(stats.sample_count, 4);
    }

    #[test]
    fn test_empty_window_has_no_stats() {
        assert_eq!(compute(&[]), None);
    }

    #[test]
    fn test_single_point_has_no_stats() {
        assert_eq!(compute(&[dec!(100)]), None);
    }

    #[test]
    fn test_zero_window_start_makes_percent_undefined() {
        let stats = compute(&[dec!(0), dec!(50)]).unwrap();

        assert_eq!(stats.total_change, dec!(50));
        assert_eq!(stats.percent_change, None);
        assert_eq!(stats.max_price, dec!(50));
        assert_eq!(stats.min_price, dec!(0));
        assert_eq!(stats.avg_price, dec!(25));
    }

    #[test]
    fn test_downward_window() {
        let stats = compute(&[dec!(200), dec!(180), dec!(150)]).unwrap();

        assert_eq!(stats.total_change, dec!(-50));
        assert_eq!(stats.percent_change, Some(dec!(-25)));
        assert_eq!(stats.min_price, dec!(150));
        assert_eq!(stats.max_price, dec!(200));
    }
}
