//! Property tests for the growth estimator and summary metrics.
//!
//! These tests check behaviour that must hold for any weigh-in series:
//! 1. Any permutation of the rows gives the same fitted ADG
//! 2. Repeated calls give identical results
//! 3. Calendar dates and equivalent day offsets give the same ADG
//! 4. Perfectly linear series recover their slope

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use herd_analytics::algorithms::{
    compute_adg_from_timeseries, compute_metrics, estimate_days_to_target, estimate_growth,
    DayAxis,
};

// ==================== Helper Functions ====================

fn observations() -> impl Strategy<Value = Vec<(i64, f64)>> {
    prop::collection::vec((0i64..1000, 0.5f64..1000.0), 2..40)
}

fn has_two_distinct_days(rows: &[(i64, f64)]) -> bool {
    rows.iter().any(|(d, _)| *d != rows[0].0)
}

fn split(rows: &[(i64, f64)]) -> (Vec<i64>, Vec<f64>) {
    rows.iter().copied().unzip()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-8 * a.abs().max(b.abs()).max(1.0)
}

// ==================== Properties ====================

proptest! {
    #[test]
    fn prop_order_independent(
        (rows, shuffled) in observations()
            .prop_flat_map(|rows| (Just(rows.clone()), Just(rows).prop_shuffle()))
    ) {
        prop_assume!(has_two_distinct_days(&rows));

        let (days, weights) = split(&rows);
        let (adg, series) = compute_adg_from_timeseries(&days, &weights);

        let (days_s, weights_s) = split(&shuffled);
        let (adg_s, series_s) = compute_adg_from_timeseries(&days_s, &weights_s);

        prop_assert!(close(adg.unwrap(), adg_s.unwrap()));
        prop_assert_eq!(series.days(), series_s.days());
    }

    #[test]
    fn prop_idempotent(rows in observations()) {
        let (days, weights) = split(&rows);

        let first = estimate_growth(&days, &weights);
        let second = estimate_growth(&days, &weights);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_dates_match_day_offsets(rows in observations()) {
        prop_assume!(has_two_distinct_days(&rows));

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates: Vec<String> = rows
            .iter()
            .map(|(d, _)| (start + Duration::days(*d)).format("%Y-%m-%d").to_string())
            .collect();
        let (days, weights) = split(&rows);

        let by_date = estimate_growth(&dates, &weights);
        let by_day = estimate_growth(&days, &weights);

        prop_assert_eq!(by_date.axis, Some(DayAxis::Calendar));
        prop_assert_eq!(by_day.axis, Some(DayAxis::DayIndex));
        prop_assert_eq!(by_date.series.days(), by_day.series.days());
        prop_assert!(close(by_date.adg.unwrap(), by_day.adg.unwrap()));
    }

    #[test]
    fn prop_linear_series_recovers_slope(
        start in 1.0f64..500.0,
        rate in -2.0f64..5.0,
        n in 2usize..30,
    ) {
        let days: Vec<f64> = (0..n).map(|d| (d * 3) as f64).collect();
        let weights: Vec<f64> = days.iter().map(|d| start + 20.0 + rate * d).collect();
        prop_assume!(weights.iter().all(|w| *w >= 0.0));

        let (adg, series) = compute_adg_from_timeseries(&days, &weights);
        prop_assert!((adg.unwrap() - rate).abs() < 1e-9);
        prop_assert_eq!(series.len(), n);
    }

    #[test]
    fn prop_series_starts_at_zero_and_is_sorted(rows in observations()) {
        let (days, weights) = split(&rows);
        let (_, series) = compute_adg_from_timeseries(&days, &weights);

        prop_assert_eq!(series.points()[0].day, 0.0);
        prop_assert!(series.days().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_summary_adg_is_two_point(
        initial in 0.0f64..1000.0,
        current in 0.0f64..1000.0,
        period in 1i64..3650,
    ) {
        let m = compute_metrics(initial, current, period, 0.0, 0.0, 0.0);
        prop_assert_eq!(m.adg, Some((current - initial) / period as f64));
        prop_assert_eq!(m.weight_gain, current - initial);
    }

    #[test]
    fn prop_days_to_target_never_negative(
        current in 0.0f64..1000.0,
        target in 0.0f64..1000.0,
        adg in proptest::option::of(-5.0f64..5.0),
    ) {
        let days = estimate_days_to_target(current, target, adg);
        prop_assert!(days >= 0.0);
        if target <= current {
            prop_assert_eq!(days, 0.0);
        }
    }
}
