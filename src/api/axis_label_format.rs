use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a value-axis label with a fixed number of decimals.
///
/// Ties round away from zero on the exact binary value, so `0.25` becomes
/// `"0.3"` and `4.35` (stored slightly below) becomes `"4.3"`. Negative zero
/// is normalized to `"0.0"`.
#[must_use]
pub fn format_value_label(value: f64, precision: u8) -> String {
    let precision = u32::from(precision);
    let text = match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded =
                decimal.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", precision as usize, rounded)
        }
        // Outside Decimal's range; fall back to the float formatter.
        None => format!("{value:.*}", precision as usize),
    };

    if is_negative_zero_text(&text) {
        text.trim_start_matches('-').to_owned()
    } else {
        text
    }
}

fn is_negative_zero_text(text: &str) -> bool {
    text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::format_value_label;

    #[test]
    fn formats_with_requested_precision() {
        assert_eq!(format_value_label(19.0, 1), "19.0");
        assert_eq!(format_value_label(17.8, 1), "17.8");
        assert_eq!(format_value_label(4.2, 2), "4.20");
        assert_eq!(format_value_label(3.0, 0), "3");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_value_label(0.25, 1), "0.3");
        assert_eq!(format_value_label(-0.25, 1), "-0.3");
        assert_eq!(format_value_label(2.5, 0), "3");
    }

    #[test]
    fn near_ties_follow_the_binary_value() {
        // 4.35 is stored as 4.3499999999999996447...
        assert_eq!(format_value_label(4.35, 1), "4.3");
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(format_value_label(-0.01, 1), "0.0");
        assert_eq!(format_value_label(-0.0, 1), "0.0");
    }
}
