//! End-to-end properties of a generated dataset, exercised through the public API only.

use chrono::{DateTime, Duration, TimeZone, Utc};
use kolboard_core::catalog::{CampaignStatus, Category};
use kolboard_core::generate::{generate_performance, generate_profiles};
use kolboard_core::insights::{compare_profiles, dashboard_overview, platform_distribution};
use kolboard_core::query::{list_profiles, ProfileFilter, SortKey, SortOrder};
use kolboard_core::recommend::{recommend, RecommendationRequest};
use kolboard_core::stats::{as_f64, count_as_f64};
use kolboard_core::stories::data_stories;
use kolboard_core::{Campaign, Dataset, GenerationSettings, Platform, Profile};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TOLERANCE: f64 = 0.1;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 20, 8, 30, 0).unwrap()
}

fn campaign_with_all(
    id: &str,
    profiles: &[Profile],
    status: CampaignStatus,
    budget: u64,
) -> Campaign {
    Campaign {
        id: id.to_string(),
        name: "全員參與活動".to_string(),
        brand: "Gogoro".to_string(),
        brand_logo: "🟡".to_string(),
        industry: "交通".to_string(),
        start_date: fixed_now() - Duration::days(30),
        end_date: fixed_now() + Duration::days(10),
        status,
        budget,
        kol_ids: profiles.iter().map(|p| p.id.clone()).collect(),
        kol_count: profiles.len(),
        objectives: vec!["品牌曝光".to_string()],
        target_audience: "通勤族".to_string(),
    }
}

fn generate(seed: u64, settings: &GenerationSettings) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    Dataset::generate_with(&mut rng, fixed_now(), settings)
}

#[test]
fn scores_stay_within_documented_ranges() {
    for seed in 0..10 {
        let dataset = generate(seed, &GenerationSettings::default());
        for p in dataset.profiles() {
            assert!(p.followers > 0);
            assert!((0.0..=100.0).contains(&p.influence_score), "{}", p.id);
            assert!((0.0..=1.0).contains(&p.sentiment_score), "{}", p.id);
            assert!((0.0..=100.0).contains(&p.authenticity_score), "{}", p.id);
            assert!((0.0..=100.0).contains(&p.audience_quality_score), "{}", p.id);
        }
    }
}

#[test]
fn every_percentage_mapping_sums_to_hundred() {
    let dataset = generate(11, &GenerationSettings::default());
    for profile in dataset.profiles() {
        let audience = dataset.audience(&profile.id).unwrap();
        let age: f64 = audience.age_groups.values().sum();
        let location: f64 = audience.locations.values().sum();
        let gender = audience.gender.female + audience.gender.male;
        for total in [age, location, gender] {
            assert!((total - 100.0).abs() <= TOLERANCE, "{}: {total}", profile.id);
        }
    }
    for perf in dataset.performances() {
        let total = perf.sentiment_positive + perf.sentiment_neutral + perf.sentiment_negative;
        assert!((total - 100.0).abs() <= TOLERANCE, "{}: {total}", perf.campaign_id);
    }
}

#[test]
fn cost_per_reach_follows_budget_over_reach() {
    let dataset = generate(12, &GenerationSettings::default());
    for perf in dataset.performances() {
        if perf.total_reach == 0 {
            assert!(perf.cost_per_reach.abs() < f64::EPSILON);
        } else {
            let expected = as_f64(perf.budget) / as_f64(perf.total_reach) * 1000.0;
            assert!((perf.cost_per_reach - expected).abs() <= 0.01);
        }
    }
}

#[test]
fn five_profiles_two_campaigns_reach_below_followers() {
    let mut rng = StdRng::seed_from_u64(13);
    let profiles = generate_profiles(&mut rng, 5);
    let total_followers: u64 = profiles.iter().map(|p| p.followers).sum();

    let campaigns = [
        campaign_with_all("camp_901", &profiles, CampaignStatus::Completed, 120_000),
        campaign_with_all("camp_902", &profiles, CampaignStatus::Active, 300_000),
    ];
    for campaign in &campaigns {
        assert_eq!(campaign.kol_ids.len(), 5);
        let perf = generate_performance(&mut rng, fixed_now(), campaign, &profiles);
        assert_eq!(perf.campaign_id, campaign.id);
        assert!(perf.total_reach > 0);
        assert!(perf.total_reach < total_followers);
    }
}

#[test]
fn instagram_listing_matches_distribution() {
    let dataset = generate(14, &GenerationSettings::default());
    let filter = ProfileFilter {
        platform: Some(Platform::Instagram),
        ..ProfileFilter::default()
    };
    let listing = list_profiles(&dataset, &filter, SortKey::default(), SortOrder::default(), 200);
    let distribution = platform_distribution(dataset.profiles());
    assert_eq!(
        listing.total,
        distribution.get(&Platform::Instagram).map_or(0, |s| s.count)
    );
    assert!(listing.items.iter().all(|p| p.platform == Platform::Instagram));
}

#[test]
fn comparison_covers_found_ids_only() {
    let dataset = generate(15, &GenerationSettings::default());
    let ids = ["kol_004", "kol_010", "kol_missing"];
    let records = compare_profiles(dataset.profiles(), &ids);
    assert_eq!(records.len(), 2);
}

#[test]
fn food_recommendations_on_forty_thousand_budget() {
    let settings = GenerationSettings {
        profile_count: 1_000,
        ..GenerationSettings::default()
    };
    let dataset = generate(16, &settings);
    let request = RecommendationRequest {
        category: Some(Category::Food),
        budget: Some(40_000),
        limit: 5,
    };
    let results = recommend(&dataset, &request);
    assert!(!results.is_empty());
    for r in results {
        assert!(r.profile.followers < 100_000);
        let expected = 70.0 + 7.5 * count_as_f64(r.match_reasons.len());
        assert!((r.match_score - expected).abs() < 1e-9);
    }
}

#[test]
fn same_seed_and_clock_reproduce_the_dataset() {
    let settings = GenerationSettings::default();
    let first = generate(99, &settings);
    let second = generate(99, &settings);
    assert_eq!(first.profiles(), second.profiles());
    assert_eq!(first.campaigns(), second.campaigns());
    assert_eq!(first.performances(), second.performances());
    assert_eq!(first.buzz_trends(), second.buzz_trends());

    let other = generate(100, &settings);
    assert_ne!(first.profiles(), other.profiles());
}

#[test]
fn aggregate_views_serialize() {
    let dataset = generate(17, &GenerationSettings::default());
    let overview = serde_json::to_value(dashboard_overview(&dataset)).unwrap();
    assert_eq!(overview["total_kols"], 28);
    let stories = serde_json::to_value(data_stories(&dataset)).unwrap();
    assert_eq!(stories["stories"].as_array().map(Vec::len), Some(8));
    assert_eq!(stories["data_sources"].as_array().map(Vec::len), Some(4));
}
