use std::collections::BTreeMap;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::{
    Category, GenderSkew, AGE_BRACKETS, CITY_SHARES, INTEREST_POOL, OTHER_LOCATION,
};
use crate::stats::{round_to, to_percentages};
use crate::types::{AudienceDemographic, GenderSplit, InterestShare};

const INTEREST_COUNT: usize = 6;

/// Generate the audience breakdown for one profile, correlated with its category.
pub fn generate_audience<R>(rng: &mut R, kol_id: &str, category: Category) -> AudienceDemographic
where
    R: Rng + ?Sized,
{
    AudienceDemographic {
        kol_id: kol_id.to_string(),
        age_groups: age_groups(rng, category),
        gender: gender_split(rng, category),
        locations: locations(rng),
        interests: interests(rng),
    }
}

fn age_groups<R>(rng: &mut R, category: Category) -> BTreeMap<String, f64>
where
    R: Rng + ?Sized,
{
    let mut weights: Vec<f64> = AGE_BRACKETS
        .iter()
        .map(|(_, low, high)| rng.random_range(*low..*high))
        .collect();

    for (label, delta) in category.age_adjustments() {
        if let Some(pos) = AGE_BRACKETS.iter().position(|(b, _, _)| b == label) {
            weights[pos] = (weights[pos] + delta).max(0.0);
        }
    }

    AGE_BRACKETS
        .iter()
        .map(|(label, _, _)| (*label).to_string())
        .zip(to_percentages(&weights))
        .collect()
}

fn gender_split<R>(rng: &mut R, category: Category) -> GenderSplit
where
    R: Rng + ?Sized,
{
    match category.gender_skew() {
        GenderSkew::Female => {
            let female = round_to(rng.random_range(65.0..=85.0), 1);
            GenderSplit {
                female,
                male: round_to(100.0 - female, 1),
            }
        }
        GenderSkew::Male => {
            let male = round_to(rng.random_range(60.0..=80.0), 1);
            GenderSplit {
                female: round_to(100.0 - male, 1),
                male,
            }
        }
        GenderSkew::Neutral => {
            let female = round_to(rng.random_range(45.0..=55.0), 1);
            GenderSplit {
                female,
                male: round_to(100.0 - female, 1),
            }
        }
    }
}

/// City shares come from fixed ranges and "other" absorbs the remainder.
/// When the named cities alone overshoot 100 they are rescaled and "other" is 0.
fn locations<R>(rng: &mut R) -> BTreeMap<String, f64>
where
    R: Rng + ?Sized,
{
    let cities: Vec<f64> = CITY_SHARES
        .iter()
        .map(|(_, low, high)| round_to(rng.random_range(*low..=*high), 1))
        .collect();
    let named_total: f64 = cities.iter().sum();

    let (cities, other) = if named_total <= 100.0 {
        (cities, round_to(100.0 - named_total, 1))
    } else {
        (to_percentages(&cities), 0.0)
    };

    CITY_SHARES
        .iter()
        .map(|(name, _, _)| (*name).to_string())
        .zip(cities)
        .chain(std::iter::once((OTHER_LOCATION.to_string(), other)))
        .collect()
}

fn interests<R>(rng: &mut R) -> Vec<InterestShare>
where
    R: Rng + ?Sized,
{
    let picked: Vec<&str> = INTEREST_POOL
        .choose_multiple(rng, INTEREST_COUNT)
        .copied()
        .collect();
    let mut shares: Vec<InterestShare> = picked
        .into_iter()
        .map(|name| InterestShare {
            name: name.to_string(),
            percentage: round_to(rng.random_range(15.0..=65.0), 1),
        })
        .collect();
    shares.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    shares
}
