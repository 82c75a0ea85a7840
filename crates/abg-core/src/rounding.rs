//! Decimal rounding for reported values.

/// Round `value` to `places` decimal digits.
///
/// Rounds the stored double exactly through the decimal formatter, so a
/// value such as `26.549999999999997` stays below the half and becomes
/// `26.5`. Exact ties go to even.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_places() {
        assert_eq!(round_to(7.3199999999, 3), 7.32);
        assert_eq!(round_to(16.04, 1), 16.0);
        assert_eq!(round_to(-4.06, 1), -4.1);
    }

    #[test]
    fn exact_ties_go_to_even() {
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(0.75, 1), 0.8);
        assert_eq!(round_to(2.5, 0), 2.0);
    }

    #[test]
    fn near_half_values_round_by_their_stored_value() {
        assert_eq!(round_to(26.549999999999997, 1), 26.5);
        assert_eq!(round_to(42.45, 1), 42.5);
        assert_eq!(round_to(7.3745, 3), 7.375);
        assert_eq!(round_to(7.338500000000001, 3), 7.339);
        assert_eq!(round_to(7.3655, 3), 7.365);
    }
}
