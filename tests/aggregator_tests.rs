//! Integration tests for the rating aggregator.
//!
//! Tests cover:
//! - Overall (trust-weighted) aggregation
//! - Season (vote-weighted) aggregation with median fallback
//! - Platform filters and configuration overrides

use rating_aggregator::core::adjust::adjust_score;
use rating_aggregator::core::aggregator::{
    aggregate_overall, aggregate_season, AggregateMode, Aggregator,
};
use rating_aggregator::core::votes::vote_weight;
use rating_aggregator::models::config::{Config, TrustWeights};
use rating_aggregator::models::dataset::RatingDataset;
use rating_aggregator::models::platform::Platform;
use rating_aggregator::models::rating::{ImdbRating, PlatformRating, RawValue};
use rating_aggregator::models::result::AggregateResult;
use serde_json::json;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn dataset(value: serde_json::Value) -> RatingDataset {
    serde_json::from_value(value).unwrap()
}

fn full_series() -> RatingDataset {
    dataset(json!({
        "douban": {
            "rating": "9.1",
            "rating_people": "210000",
            "seasons": [
                { "season_number": 1, "rating": "9.3", "rating_people": "120000" },
                { "season_number": 2, "rating": "8.7", "rating_people": "80000" }
            ]
        },
        "imdb": { "rating": "8.9", "rating_people": "1.2M" },
        "letterboxd": { "rating": "4.2", "rating_count": "35K" },
        "rottentomatoes": {
            "series": {
                "tomatometer": "96%",
                "audience_score": "94%",
                "critics_avg": "8.6/10",
                "audience_avg": "4.6/5",
                "critics_count": "120",
                "audience_count": "25,000+"
            },
            "seasons": [
                { "season_number": 1, "tomatometer": "100%", "critics_count": "40" },
                { "season_number": 2, "tomatometer": "92%" }
            ]
        },
        "metacritic": {
            "overall": { "metascore": "88", "critics_count": "30", "userscore": "tbd" },
            "seasons": [{ "season_number": 1, "metascore": "90", "critics_count": "25" }]
        },
        "tmdb": {
            "rating": 8.5,
            "voteCount": 14000,
            "seasons": [
                { "season_number": 1, "rating": 8.6, "vote_count": 900 },
                { "season_number": 2, "rating": 8.2, "vote_count": 600 }
            ]
        },
        "trakt": {
            "rating": 8.8,
            "votes": 42000,
            "seasons": [{ "season_number": 1, "rating": 2.0, "votes": 99999 }]
        }
    }))
}

// ========== OVERALL TESTS ==========

#[test]
fn test_overall_empty_dataset() {
    let result = aggregate_overall(&RatingDataset::new(), &Config::default());
    assert_eq!(result, AggregateResult::empty());
    assert_eq!(result.rating, None);
    assert_eq!(result.valid_ratings, 0);
    assert!(result.platforms.is_empty());
}

#[test]
fn test_overall_only_sentinels() {
    let data = dataset(json!({
        "douban": { "rating": "暂无评分", "rating_people": "0" },
        "imdb": { "rating": "N/A" },
        "metacritic": { "overall": { "metascore": "tbd", "userscore": "tbd" } },
        "tmdb": { "rating": 0 }
    }));
    let result = aggregate_overall(&data, &Config::default());
    assert_eq!(result, AggregateResult::empty());
}

#[test]
fn test_overall_single_platform_equals_adjusted_score() {
    let data = dataset(json!({ "imdb": { "rating": "7.9", "rating_people": "12345" } }));
    let result = aggregate_overall(&data, &Config::default());

    assert_eq!(result.valid_ratings, 1);
    assert_eq!(result.platforms, vec![Platform::Imdb]);
    assert!(approx(result.rating.unwrap(), adjust_score(7.9)));
}

#[test]
fn test_overall_douban_and_imdb() {
    let data = dataset(json!({
        "douban": { "rating": "8.5", "rating_people": "100000" },
        "imdb": { "rating": "7.0", "rating_people": "500000" }
    }));
    let result = aggregate_overall(&data, &Config::default());

    assert_eq!(result.valid_ratings, 2);
    assert_eq!(result.platforms, vec![Platform::Douban, Platform::Imdb]);

    let douban = adjust_score(8.5);
    let imdb = adjust_score(7.0);
    let rating = result.rating.unwrap();
    assert!(rating > imdb && rating < douban);

    // IMDb has the larger vote bonus
    let douban_bonus = vote_weight(Some(&RawValue::from("100000")));
    let imdb_bonus = vote_weight(Some(&RawValue::from("500000")));
    assert!(imdb_bonus > douban_bonus);

    let w_douban = 1.8 * (1.0 + douban_bonus);
    let w_imdb = 1.7 * (1.0 + imdb_bonus);
    let expected = (douban * w_douban + imdb * w_imdb) / (w_douban + w_imdb);
    assert!(approx(rating, expected));
}

#[test]
fn test_overall_rotten_tomatoes_averages_sub_scores() {
    let data = dataset(json!({
        "rottentomatoes": {
            "series": {
                "tomatometer": "90%",
                "audience_score": "70%",
                "critics_avg": "N/A",
                "audience_avg": "3.5/5"
            }
        }
    }));
    let result = aggregate_overall(&data, &Config::default());

    let expected = (adjust_score(9.0) + adjust_score(7.0) + adjust_score(7.0)) / 3.0;
    assert_eq!(result.valid_ratings, 1);
    assert_eq!(result.platforms, vec![Platform::RottenTomatoes]);
    assert!(approx(result.rating.unwrap(), expected));
}

#[test]
fn test_overall_full_series_lists_every_platform_once() {
    let data = full_series();
    let result = aggregate_overall(&data, &Config::default());

    assert_eq!(result.valid_ratings, 7);
    assert_eq!(result.platforms, Platform::ALL.to_vec());
    let rating = result.rating.unwrap();
    assert!((0.0..=10.2).contains(&rating));
}

#[test]
fn test_overall_missing_count_keeps_base_trust() {
    let data = dataset(json!({
        "douban": { "rating": "8.0" },
        "tmdb": { "rating": 6.0, "vote_count": "lots" }
    }));
    let aggregator = Aggregator::default();
    let contributions = aggregator.contributions(&data, AggregateMode::Overall);

    assert_eq!(contributions.len(), 2);
    assert!(approx(contributions[0].weight, 1.8));
    assert!(approx(contributions[1].weight, 0.7));
}

#[test]
fn test_platforms_filter_round_trip() {
    let data = full_series();
    let aggregator = Aggregator::default();
    let first = aggregator.aggregate_overall(&data);

    let filtered = Aggregator::default().with_platforms(first.platforms.clone());
    let second = filtered.aggregate_overall(&data);

    assert_eq!(first.valid_ratings, second.valid_ratings);
    assert_eq!(first, second);
}

#[test]
fn test_tmdb_trakt_only() {
    let data = full_series();
    let result = Aggregator::default()
        .with_platforms([Platform::Tmdb, Platform::Trakt])
        .aggregate_overall(&data);

    assert_eq!(result.platforms, vec![Platform::Tmdb, Platform::Trakt]);
    let rating = result.rating.unwrap();
    assert!(rating > adjust_score(8.5) && rating < adjust_score(8.8));
}

#[test]
fn test_trust_override() {
    let data = dataset(json!({
        "douban": { "rating": "9.0", "rating_people": "1000" },
        "tmdb": { "rating": 6.0, "vote_count": 1000 }
    }));

    // Zero trust disables Douban entirely
    let config = Config {
        trust: TrustWeights::default().with(Platform::Douban, 0.0),
        ..Config::default()
    };
    let result = aggregate_overall(&data, &config);
    assert_eq!(result.platforms, vec![Platform::Tmdb]);
    assert!(approx(result.rating.unwrap(), adjust_score(6.0)));
}

#[test]
fn test_aggregation_is_deterministic() {
    let data = full_series();
    let aggregator = Aggregator::default();
    assert_eq!(
        aggregator.aggregate_overall(&data),
        aggregator.aggregate_overall(&data)
    );
}

#[test]
fn test_incremental_snapshots() {
    let empty = RatingDataset::new();
    let aggregator = Aggregator::default();
    assert!(!aggregator.aggregate_overall(&empty).has_rating());

    let with_imdb = empty.with_rating(PlatformRating::Imdb(ImdbRating {
        rating: Some(RawValue::from("8.0")),
        rating_people: Some(RawValue::from("90K")),
    }));
    let result = aggregator.aggregate_overall(&with_imdb);
    assert_eq!(result.platforms, vec![Platform::Imdb]);

    // The earlier snapshot is untouched
    assert!(!aggregator.aggregate_overall(&empty).has_rating());
}

// ========== SEASON TESTS ==========

#[test]
fn test_season_vote_weighted_mean() {
    let data = dataset(json!({
        "douban": { "seasons": [{ "season_number": 1, "rating": "8.0", "rating_people": "2000" }] },
        "tmdb": { "seasons": [{ "season_number": 1, "rating": 7.5, "vote_count": 500 }] },
        "rottentomatoes": { "seasons": [{ "season_number": 1, "tomatometer": "90%", "critics_count": "40" }] },
        "trakt": { "seasons": [{ "season_number": 1, "rating": 2.0, "votes": 10000 }] }
    }));
    let result = aggregate_season(&data, 1, &Config::default());

    let expected = (8.0 * 2000.0 + 7.5 * 500.0 + adjust_score(9.0) * 40.0) / 2540.0;
    assert_eq!(
        result.platforms,
        vec![Platform::Douban, Platform::RottenTomatoes, Platform::Tmdb]
    );
    assert_eq!(result.valid_ratings, 3);
    assert!(approx(result.rating.unwrap(), expected));
}

#[test]
fn test_season_ignores_trust_weights() {
    let data = dataset(json!({
        "douban": { "seasons": [{ "season_number": 1, "rating": "8.0", "rating_people": 100 }] },
        "tmdb": { "seasons": [{ "season_number": 1, "rating": 7.0, "vote_count": 100 }] }
    }));
    let config = Config {
        trust: TrustWeights::default().with(Platform::Douban, 100.0),
        ..Config::default()
    };
    let result = aggregate_season(&data, 1, &config);
    assert!(approx(result.rating.unwrap(), 7.5));
}

#[test]
fn test_season_missing_count_uses_median() {
    let data = dataset(json!({
        "douban": { "seasons": [{ "season_number": 2, "rating": "8.0" }] },
        "tmdb": { "seasons": [{ "season_number": 2, "rating": 7.0, "vote_count": 300 }] },
        "metacritic": { "seasons": [{ "season_number": 2, "metascore": "70", "critics_count": "9" }] }
    }));
    let result = aggregate_season(&data, 2, &Config::default());

    let median = (9.0 + 300.0) / 2.0;
    let expected = (8.0 * median + 7.0 * 300.0 + 7.0 * 9.0) / (median + 309.0);
    assert_eq!(result.valid_ratings, 3);
    assert!(approx(result.rating.unwrap(), expected));
}

#[test]
fn test_season_without_any_counts_uses_fallback() {
    let data = dataset(json!({
        "douban": { "seasons": [{ "season_number": 1, "rating": "8.0" }] },
        "tmdb": { "seasons": [{ "season_number": 1, "rating": 6.0 }] }
    }));
    let result = aggregate_season(&data, 1, &Config::default());

    // Both fall back to the same count, so this is a plain mean
    assert!(approx(result.rating.unwrap(), (8.0 + adjust_score(6.0)) / 2.0));

    let aggregator = Aggregator::default();
    let contributions = aggregator.contributions(&data, AggregateMode::Season(1));
    assert!(contributions.iter().all(|c| approx(c.weight, 1000.0)));
}

#[test]
fn test_season_excludes_non_seasonal_platforms() {
    let data = dataset(json!({
        "imdb": { "rating": "8.0", "rating_people": "100000" },
        "letterboxd": { "rating": "4.0", "rating_count": "1000" },
        "trakt": { "seasons": [{ "season_number": 1, "rating": 8.0, "votes": 500 }] }
    }));
    let result = aggregate_season(&data, 1, &Config::default());
    assert_eq!(result, AggregateResult::empty());
}

#[test]
fn test_season_not_present() {
    let result = aggregate_season(&full_series(), 9, &Config::default());
    assert_eq!(result.rating, None);
    assert_eq!(result.valid_ratings, 0);
}

#[test]
fn test_all_seasons() {
    let data = full_series();
    let all = Aggregator::default().aggregate_all_seasons(&data);

    assert_eq!(all.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    let season_one = &all[&1];
    assert_eq!(
        season_one.platforms,
        vec![
            Platform::Douban,
            Platform::RottenTomatoes,
            Platform::Metacritic,
            Platform::Tmdb
        ]
    );
    let season_two = &all[&2];
    assert_eq!(
        season_two.platforms,
        vec![Platform::Douban, Platform::RottenTomatoes, Platform::Tmdb]
    );
    // Trakt's outlier season score is not part of the season result
    assert!(season_one.rating.unwrap() > 8.0);
}
