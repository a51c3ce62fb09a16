use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::catalog::BUZZ_KEYWORDS;
use crate::dataset::GenerationSettings;
use crate::insights::platform_distribution;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn sample_dataset(seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    Dataset::generate_with(&mut rng, fixed_now(), &GenerationSettings::default())
}

#[test]
fn platform_filter_agrees_with_platform_distribution() {
    let dataset = sample_dataset(42);
    let distribution = platform_distribution(dataset.profiles());

    for platform in Platform::ALL {
        let filter = ProfileFilter {
            platform: Some(platform),
            ..ProfileFilter::default()
        };
        let listing =
            list_profiles(&dataset, &filter, SortKey::default(), SortOrder::default(), 200);
        assert!(listing.items.iter().all(|p| p.platform == platform));
        let expected = distribution.get(&platform).map_or(0, |s| s.count);
        assert_eq!(listing.total, expected, "{platform}");
    }
}

#[test]
fn default_sort_is_influence_descending() {
    let dataset = sample_dataset(1);
    let listing = list_profiles(
        &dataset,
        &ProfileFilter::default(),
        SortKey::default(),
        SortOrder::default(),
        50,
    );
    assert_eq!(listing.total, 28);
    assert!(listing
        .items
        .windows(2)
        .all(|w| w[0].influence_score >= w[1].influence_score));
}

#[test]
fn ascending_follower_sort() {
    let dataset = sample_dataset(2);
    let listing = list_profiles(
        &dataset,
        &ProfileFilter::default(),
        SortKey::Followers,
        SortOrder::Asc,
        50,
    );
    assert!(listing
        .items
        .windows(2)
        .all(|w| w[0].followers <= w[1].followers));
}

#[test]
fn limit_truncates_items_but_not_total() {
    let dataset = sample_dataset(3);
    let listing = list_profiles(
        &dataset,
        &ProfileFilter::default(),
        SortKey::EngagementRate,
        SortOrder::Desc,
        5,
    );
    assert_eq!(listing.items.len(), 5);
    assert_eq!(listing.total, 28);
}

#[test]
fn follower_and_engagement_bounds_filter_inclusively() {
    let dataset = sample_dataset(4);
    let filter = ProfileFilter {
        min_followers: Some(100_000),
        max_followers: Some(2_000_000),
        min_engagement: Some(2.0),
        ..ProfileFilter::default()
    };
    let listing =
        list_profiles(&dataset, &filter, SortKey::default(), SortOrder::default(), 200);
    let expected = dataset
        .profiles()
        .iter()
        .filter(|p| (100_000..=2_000_000).contains(&p.followers) && p.engagement_rate >= 2.0)
        .count();
    assert_eq!(listing.total, expected);
}

#[test]
fn sort_key_and_order_parse() {
    assert_eq!("followers".parse::<SortKey>(), Ok(SortKey::Followers));
    assert_eq!("ASC".parse::<SortOrder>(), Ok(SortOrder::Asc));
    assert!("popularity".parse::<SortKey>().is_err());
    assert!("sideways".parse::<SortOrder>().is_err());
}

#[test]
fn unknown_ids_are_absent_not_errors() {
    let dataset = sample_dataset(5);
    assert!(get_campaign(&dataset, "camp_404").is_none());
    assert!(get_campaign_detail(&dataset, "camp_404").is_none());
    assert!(get_campaign_performance(&dataset, "camp_404").is_none());
    assert!(get_profile(&dataset, "kol_404").is_none());
    assert!(get_profile_detail(&dataset, "kol_404").is_none());
    assert!(get_audience(&dataset, "kol_404").is_none());
}

#[test]
fn profile_detail_history_ends_at_generation_month() {
    let dataset = sample_dataset(6);
    let detail = get_profile_detail(&dataset, "kol_001").unwrap();
    let history = &detail.performance_history;

    assert_eq!(history.months, ["1月", "2月", "3月", "4月", "5月", "6月"]);
    let expected = round_to(detail.profile.engagement_rate * 0.85, 2);
    assert!((history.engagement_rates[0] - expected).abs() < 1e-9);
    assert_eq!(history.followers_growth.len(), 6);
    assert!(history
        .followers_growth
        .windows(2)
        .all(|w| w[0] <= w[1]));
    assert!(detail.audience_demographics.is_some());
    assert!(detail
        .campaigns
        .iter()
        .all(|c| c.kol_ids.iter().any(|k| k == "kol_001")));
}

#[test]
fn history_months_wrap_across_the_year() {
    let mut rng = StdRng::seed_from_u64(7);
    let january = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
    let dataset = Dataset::generate_with(&mut rng, january, &GenerationSettings::default());
    let detail = get_profile_detail(&dataset, "kol_002").unwrap();
    assert_eq!(
        detail.performance_history.months,
        ["8月", "9月", "10月", "11月", "12月", "1月"]
    );
}

#[test]
fn campaign_filters_and_detail() {
    let dataset = sample_dataset(8);
    let completed = list_campaigns(
        &dataset,
        &CampaignFilter {
            status: Some(CampaignStatus::Completed),
            brand: None,
        },
    );
    assert_eq!(completed.total, 3);
    assert!(completed
        .items
        .iter()
        .all(|c| c.status == CampaignStatus::Completed));

    let first = &dataset.campaigns()[0];
    let by_brand = list_campaigns(
        &dataset,
        &CampaignFilter {
            status: None,
            brand: Some(first.brand.clone()),
        },
    );
    assert!(by_brand.items.iter().any(|c| c.id == first.id));

    let detail = get_campaign_detail(&dataset, &first.id).unwrap();
    assert_eq!(detail.kols.len(), first.kol_ids.len());
    assert_eq!(
        detail.performance.map(|p| p.campaign_id.as_str()),
        Some(first.id.as_str())
    );
}

#[test]
fn buzz_window_for_one_keyword_keeps_all_days() {
    let dataset = sample_dataset(9);
    let trends = list_buzz_trends(&dataset, Some("代言人"), 30);
    assert_eq!(trends.len(), 30);
    assert!(trends.iter().all(|t| t.keyword == "代言人"));
}

#[test]
fn buzz_window_is_positional_over_flat_series() {
    let dataset = sample_dataset(10);
    assert_eq!(list_buzz_trends(&dataset, None, 30).len(), 150);

    let trailing = list_buzz_trends(&dataset, None, 2);
    assert_eq!(trailing.len(), 10);
    let last_keyword = BUZZ_KEYWORDS[BUZZ_KEYWORDS.len() - 1];
    assert!(trailing.iter().all(|t| t.keyword == last_keyword));
}

#[test]
fn unknown_buzz_keyword_is_empty() {
    let dataset = sample_dataset(11);
    assert!(list_buzz_trends(&dataset, Some("不存在"), 30).is_empty());
}

#[test]
fn buzz_keywords_keep_first_seen_order() {
    let dataset = sample_dataset(12);
    assert_eq!(buzz_keywords(&dataset), BUZZ_KEYWORDS);
}
