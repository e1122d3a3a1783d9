//! Integration tests for score normalization and band adjustment.
//!
//! Tests cover:
//! - "No score" placeholders on every platform
//! - Scale conversion per platform and score kind
//! - Band calibration curve

use rating_aggregator::core::adjust::{adjust_score, ScoreBand};
use rating_aggregator::core::normalizer::normalize;
use rating_aggregator::models::platform::{Platform, ScoreKind};
use rating_aggregator::models::rating::RawValue;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn sentinels() -> Vec<RawValue> {
    vec![
        RawValue::from("暂无评分"),
        RawValue::from("tbd"),
        RawValue::from("N/A"),
        RawValue::from("0"),
        RawValue::from(0.0),
    ]
}

// ========== SENTINEL TESTS ==========

#[test]
fn test_sentinels_are_none_for_every_platform() {
    let kinds = [
        ScoreKind::Rating,
        ScoreKind::Percentage,
        ScoreKind::CriticAverage,
        ScoreKind::AudienceAverage,
        ScoreKind::Metascore,
        ScoreKind::Userscore,
    ];

    for platform in Platform::ALL {
        assert_eq!(normalize(None, platform, ScoreKind::Rating), None);
        for kind in kinds {
            for raw in sentinels() {
                assert_eq!(
                    normalize(Some(&raw), platform, kind),
                    None,
                    "{:?} should be no score for {} {}",
                    raw,
                    platform,
                    kind
                );
            }
        }
    }
}

#[test]
fn test_garbage_is_none() {
    let raw = RawValue::from("coming soon");
    assert_eq!(normalize(Some(&raw), Platform::Douban, ScoreKind::Rating), None);
}

// ========== SCALE TESTS ==========

#[test]
fn test_native_scale_passes_through() {
    for x in [0.5, 3.3, 7.0, 8.8, 10.0] {
        let raw = RawValue::from(x);
        assert_eq!(normalize(Some(&raw), Platform::Imdb, ScoreKind::Rating), Some(x));
        assert_eq!(normalize(Some(&raw), Platform::Douban, ScoreKind::Rating), Some(x));
        assert_eq!(normalize(Some(&raw), Platform::Tmdb, ScoreKind::Rating), Some(x));
        assert_eq!(normalize(Some(&raw), Platform::Trakt, ScoreKind::Rating), Some(x));
    }
}

#[test]
fn test_exact_conversions() {
    assert_eq!(
        normalize(
            Some(&RawValue::from("80%")),
            Platform::RottenTomatoes,
            ScoreKind::Percentage
        ),
        Some(8.0)
    );
    assert_eq!(
        normalize(Some(&RawValue::from(4.0)), Platform::Letterboxd, ScoreKind::Rating),
        Some(8.0)
    );
    assert_eq!(
        normalize(
            Some(&RawValue::from("75")),
            Platform::Metacritic,
            ScoreKind::Metascore
        ),
        Some(7.5)
    );
}

#[test]
fn test_rotten_tomatoes_kinds() {
    let avg = RawValue::from("4.1/5");
    assert_eq!(
        normalize(Some(&avg), Platform::RottenTomatoes, ScoreKind::AudienceAverage),
        Some(8.2)
    );

    // Critic average is already 0-10
    let critic = RawValue::from("7.4/10");
    assert_eq!(
        normalize(Some(&critic), Platform::RottenTomatoes, ScoreKind::CriticAverage),
        Some(7.4)
    );
}

#[test]
fn test_metacritic_userscore_unscaled() {
    let raw = RawValue::from("8.1");
    assert_eq!(
        normalize(Some(&raw), Platform::Metacritic, ScoreKind::Userscore),
        Some(8.1)
    );
}

#[test]
fn test_out_of_range_is_none() {
    // A percentage on a 0-10 platform is not a score
    let raw = RawValue::from("85");
    assert_eq!(normalize(Some(&raw), Platform::Imdb, ScoreKind::Rating), None);

    let raw = RawValue::from(5.5);
    assert_eq!(normalize(Some(&raw), Platform::Letterboxd, ScoreKind::Rating), None);
}

// ========== BAND ADJUSTMENT TESTS ==========

#[test]
fn test_adjust_score_reference_points() {
    assert!(approx(adjust_score(9.0), 9.18));
    assert!(approx(adjust_score(7.0), 7.0));
    assert!(approx(adjust_score(6.0), 5.88));
    assert!(approx(adjust_score(4.0), 3.72));
}

#[test]
fn test_adjust_score_monotonic() {
    let mut previous = adjust_score(0.0);
    for i in 1..=1000 {
        let score = i as f64 / 100.0;
        let adjusted = adjust_score(score);
        assert!(
            adjusted >= previous,
            "adjust_score decreased at {}: {} < {}",
            score,
            adjusted,
            previous
        );
        previous = adjusted;
    }
}

#[test]
fn test_adjusted_ceiling() {
    assert!(adjust_score(10.0) <= 10.2 + 1e-9);
    assert_eq!(ScoreBand::of(10.0), ScoreBand::Acclaimed);
}
