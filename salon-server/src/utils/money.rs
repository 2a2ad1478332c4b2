//! Money calculation utilities using rust_decimal for precision
//!
//! Monetary values are stored as `f64` in the models; every sum and
//! ratio goes through `Decimal` and is rounded to cents half-up before
//! being converted back.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert an f64 to Decimal, treating non-finite input as zero
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert a Decimal back to f64, rounded to cents
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Format a monetary value as `"$X.XX"`
pub fn format_usd(value: Decimal) -> String {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    // Pad to exactly two places ("$2" -> "$2.00")
    rounded.rescale(DECIMAL_PLACES);
    format!("${}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_sum_avoids_float_drift() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum), 0.3);
    }

    #[test]
    fn accumulation_precision() {
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn format_usd_two_places() {
        let rpm = to_decimal(100.0) / to_decimal(90.0);
        assert_eq!(format_usd(rpm), "$1.11");
        assert_eq!(format_usd(to_decimal(2.0)), "$2.00");
    }

    #[test]
    fn non_finite_treated_as_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }
}
