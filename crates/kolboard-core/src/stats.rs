//! Small numeric helpers shared by the generators and aggregations.

/// Round `value` to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Arithmetic mean, or `0.0` for an empty input.
#[must_use]
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_u32), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// `numerator / denominator`, or `0.0` when the denominator is zero.
#[must_use]
pub fn ratio_or_zero(numerator: f64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / as_f64(denominator)
    }
}

#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn as_f64(value: u64) -> f64 {
    value as f64
}

/// Truncating float-to-count conversion. Negative and NaN inputs saturate to `0`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn count_as_f64(value: usize) -> f64 {
    value as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn truncate(value: f64) -> u64 {
    value as u64
}

/// Scale non-negative weights into one-decimal percentages summing to exactly 100.
///
/// Rounding drift is folded into the largest share. All-zero input yields all zeros.
#[must_use]
pub fn to_percentages(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || total <= 0.0 {
        return vec![0.0; weights.len()];
    }

    let mut shares: Vec<f64> = weights
        .iter()
        .map(|w| round_to(w / total * 100.0, 1))
        .collect();

    let drift = round_to(100.0 - shares.iter().sum::<f64>(), 1);
    if drift.abs() > f64::EPSILON {
        if let Some(largest) = shares.iter_mut().max_by(|a, b| a.total_cmp(b)) {
            *largest = round_to(*largest + drift, 1);
        }
    }
    shares
}

/// First item with the highest key. Ties keep the earlier item.
#[must_use]
pub fn first_max_by<I, T, F>(items: I, key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> f64,
{
    items
        .into_iter()
        .reduce(|best, item| if key(&item) > key(&best) { item } else { best })
}

/// Format an integer with comma thousands separators (`1234567` -> `1,234,567`).
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_one_and_two_places() {
        assert!((round_to(12.344, 1) - 12.3).abs() < 1e-9);
        assert!((round_to(12.346, 2) - 12.35).abs() < 1e-9);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert!(mean(std::iter::empty::<f64>()).abs() < f64::EPSILON);
        assert!((mean([2.0, 4.0]) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_guards_zero_denominator() {
        assert!(ratio_or_zero(10.0, 0).abs() < f64::EPSILON);
        assert!((ratio_or_zero(10.0, 4) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn truncate_saturates_negative() {
        assert_eq!(truncate(-3.7), 0);
        assert_eq!(truncate(3.7), 3);
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let shares = to_percentages(&[1.0, 1.0, 1.0]);
        let total: f64 = shares.iter().sum();
        assert!((total - 100.0).abs() < 1e-9, "sum was {total}");
        assert_eq!(shares.len(), 3);
    }

    #[test]
    fn percentages_of_zero_weights_are_zero() {
        assert_eq!(to_percentages(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn first_max_keeps_earliest_tie() {
        let items = [("a", 1.0), ("b", 3.0), ("c", 3.0)];
        assert_eq!(first_max_by(items, |i| i.1).map(|i| i.0), Some("b"));
        assert_eq!(first_max_by(Vec::<(&str, f64)>::new(), |i| i.1), None);
    }

    #[test]
    fn group_thousands_inserts_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_345_678), "12,345,678");
    }
}
