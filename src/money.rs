//! Shared currency and percentage helpers.
//!
//! Every monetary output in the system passes through [`round_currency`] so
//! display code never sees inconsistent cents between the summary fields.

/// Rounds a monetary amount half-up to two decimals.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Rounds a ratio to a whole percentage, capped to `0..=100`.
pub fn clamped_percent(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Per-unit percentage-off display value:
/// `round((reference − unit) / reference × 100)`, never below 0.
///
/// Returns `None` when no reference price exists or it is non-positive — the
/// discount badge is simply not shown in that case.
pub fn percent_off(reference_price: Option<f64>, unit_price: f64) -> Option<u8> {
    let reference = reference_price?;
    if reference <= 0.0 {
        return None;
    }
    let saved = (reference - unit_price).max(0.0);
    Some(clamped_percent(saved / reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(1.125), 1.13);
        assert_eq!(round_currency(10.0 / 3.0), 3.33);
        assert_eq!(round_currency(2.674_999), 2.67);
        assert_eq!(round_currency(0.0), 0.0);
    }

    #[test]
    fn test_clamped_percent_caps() {
        assert_eq!(clamped_percent(0.25), 25);
        assert_eq!(clamped_percent(5.0), 100);
        assert_eq!(clamped_percent(0.0), 0);
    }

    #[test]
    fn test_percent_off() {
        assert_eq!(percent_off(Some(100.0), 75.0), Some(25));
        assert_eq!(percent_off(Some(100.0), 100.0), Some(0));
        // Reference below unit price shows no discount rather than a negative one.
        assert_eq!(percent_off(Some(50.0), 75.0), Some(0));
        assert_eq!(percent_off(None, 75.0), None);
        assert_eq!(percent_off(Some(0.0), 75.0), None);
    }
}
