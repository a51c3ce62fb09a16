use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::stats::{as_f64, round_to, to_percentages, truncate};
use crate::types::{BuzzTrend, SourceBreakdown};

/// Days of the series amplified to simulate a campaign spike.
const SPIKE_WINDOW: RangeInclusive<u32> = 15..=22;
const SPIKE_MULTIPLIER: f64 = 2.0;

/// Generate `days` daily observations for every keyword.
///
/// The result is flat and keyword-major: all days of the first keyword, then all
/// days of the second, and so on. The last day of each keyword falls on `now`.
pub fn generate_buzz_trends<R>(
    rng: &mut R,
    now: DateTime<Utc>,
    days: u32,
    keywords: &[&str],
) -> Vec<BuzzTrend>
where
    R: Rng + ?Sized,
{
    let mut trends = Vec::with_capacity(keywords.len() * days as usize);

    for keyword in keywords {
        let base_volume = as_f64(rng.random_range(500..=5_000));
        for day in 0..days {
            let mut multiplier = 1.0 + rng.random_range(-0.3..0.5);
            if SPIKE_WINDOW.contains(&day) {
                multiplier *= SPIKE_MULTIPLIER;
            }

            trends.push(BuzzTrend {
                keyword: (*keyword).to_string(),
                date: (now - Duration::days(i64::from(days - 1 - day))).date_naive(),
                volume: truncate(base_volume * multiplier),
                sentiment: round_to(rng.random_range(0.4..=0.9), 2),
                source_breakdown: source_breakdown(rng),
            });
        }
    }

    trends
}

/// Raw per-source weights drawn from fixed ranges, normalized to percentages.
fn source_breakdown<R>(rng: &mut R) -> SourceBreakdown
where
    R: Rng + ?Sized,
{
    let raw: [u32; 5] = [
        rng.random_range(20..=40),
        rng.random_range(15..=30),
        rng.random_range(10..=25),
        rng.random_range(5..=15),
        rng.random_range(5..=15),
    ];
    let shares = to_percentages(&raw.map(f64::from));

    SourceBreakdown {
        instagram: shares[0],
        facebook: shares[1],
        youtube: shares[2],
        ptt: shares[3],
        news: shares[4],
    }
}
