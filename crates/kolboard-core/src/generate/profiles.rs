use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use rand::seq::IndexedRandom;
use rand::Rng;

use super::pick;
use crate::catalog::{price_bracket, Category, Platform, BRAND_FIT_TAGS, KOL_NAMES, STYLE_TAGS};
use crate::stats::{as_f64, round_to, truncate};
use crate::types::Profile;

/// Accounts above this size engage proportionally less.
const LARGE_ACCOUNT_FOLLOWERS: u64 = 1_000_000;
/// Accounts below this size engage proportionally more.
const SMALL_ACCOUNT_FOLLOWERS: u64 = 100_000;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Generate `count` profiles with sequential ids `kol_001`, `kol_002`, ...
pub fn generate_profiles<R>(rng: &mut R, count: usize) -> Vec<Profile>
where
    R: Rng + ?Sized,
{
    (0..count).map(|index| generate_profile(rng, index)).collect()
}

/// Display name for the profile at `index`.
///
/// Names wrap around the pool once it is exhausted and gain a round suffix
/// (`HowHow 2`), so names stay unique for any count.
#[must_use]
pub fn profile_name(index: usize) -> String {
    let base = KOL_NAMES[index % KOL_NAMES.len()];
    let round = index / KOL_NAMES.len();
    if round == 0 {
        base.to_string()
    } else {
        format!("{base} {}", round + 1)
    }
}

fn generate_profile<R>(rng: &mut R, index: usize) -> Profile
where
    R: Rng + ?Sized,
{
    let name = profile_name(index);
    let platform = *pick(rng, &Platform::ALL);
    let category = *pick(rng, &Category::ALL);
    let followers: u64 = rng.random_range(10_000..=5_000_000);

    let mut engagement: f64 = rng.random_range(0.02..0.10);
    if followers > LARGE_ACCOUNT_FOLLOWERS {
        engagement *= 0.6;
    } else if followers < SMALL_ACCOUNT_FOLLOWERS {
        engagement *= 1.3;
    }

    let avg_likes = truncate(as_f64(followers) * engagement * rng.random_range(0.7..1.0));
    let avg_comments = truncate(as_f64(avg_likes) * rng.random_range(0.02..0.07));
    let avg_shares = truncate(as_f64(avg_likes) * rng.random_range(0.01..0.04));

    let influence =
        (30.0 + as_f64(followers) / 50_000.0 + rng.random_range(0.0..20.0)).min(100.0);

    let tag_pool: Vec<&str> = Category::ALL
        .iter()
        .map(|c| c.label())
        .chain(STYLE_TAGS.iter().copied())
        .collect();
    let tags = tag_pool
        .choose_multiple(rng, 4)
        .map(|t| (*t).to_string())
        .collect();

    let fit_count = rng.random_range(3..=6);
    let brand_fit_tags = BRAND_FIT_TAGS
        .choose_multiple(rng, fit_count)
        .map(|t| (*t).to_string())
        .collect();

    Profile {
        id: format!("kol_{:03}", index + 1),
        avatar: avatar_url(&name),
        name,
        platform,
        category,
        followers,
        engagement_rate: round_to(engagement * 100.0, 2),
        avg_likes,
        avg_comments,
        avg_shares,
        influence_score: round_to(influence, 1),
        sentiment_score: round_to(rng.random_range(0.3..=0.95), 2),
        authenticity_score: round_to(rng.random_range(60.0..=98.0), 1),
        audience_quality_score: round_to(rng.random_range(55.0..=95.0), 1),
        tags,
        price_range: price_bracket(followers).to_string(),
        collaboration_count: rng.random_range(5..=80),
        brand_fit_tags,
    }
}

fn avatar_url(name: &str) -> String {
    format!(
        "{AVATAR_BASE_URL}?seed={}",
        utf8_percent_encode(name, NON_ALPHANUMERIC)
    )
}
