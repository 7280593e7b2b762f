//! Resolution of variance swap definitions against realized fixings.

use approx::assert_relative_eq;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Weekday};
use std::collections::HashSet;
use std::sync::Arc;
use vs_core::{Error, TimeSeries};
use vs_currencies::currencies::USD;
use vs_instruments::{Instrument, VarianceSwapDefinition};
use vs_time::{
    Actual365Fixed, BespokeCalendar, Calendar, DayCountTimeCalculator, Frequency, WeekendsOnly,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn utc(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(y, m, d, 0, 0, 0)
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn january_2012_on(calendar: Arc<dyn Calendar>) -> VarianceSwapDefinition {
    VarianceSwapDefinition::from_vega_params(
        utc(2012, 1, 2),
        utc(2012, 1, 31),
        utc(2012, 2, 3),
        Frequency::Daily,
        USD,
        calendar,
        252.0,
        0.2,
        1000.0,
    )
    .unwrap()
}

fn january_2012() -> VarianceSwapDefinition {
    january_2012_on(Arc::new(WeekendsOnly))
}

/// A fixing of 100 + day-of-month on every weekday in `[from, to]`.
fn weekday_fixings(from: NaiveDate, to: NaiveDate) -> TimeSeries<NaiveDate, f64> {
    from.iter_days()
        .take_while(|d| *d <= to)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .map(|d| (d, 100.0 + d.day() as f64))
        .collect()
}

// ─── Before the observation window ───────────────────────────────────────────

#[test]
fn before_observation_start_nothing_is_realized() {
    init_tracing();
    let swap = january_2012();
    let resolved = swap
        .to_derivative(&utc(2011, 12, 15), &TimeSeries::new())
        .unwrap();

    assert!(resolved.observations().is_empty());
    assert!(resolved.observation_weights().is_empty());
    assert_eq!(resolved.n_obs_disrupted(), 0);
    assert_eq!(resolved.n_obs_expected(), 22);
    assert_relative_eq!(
        resolved.time_to_obs_start(),
        17.0 / 365.0 + 1.0 / 366.0,
        epsilon = 1e-12
    );
    assert!(resolved.time_to_obs_end() > resolved.time_to_obs_start());
    assert!(resolved.time_to_settlement() > resolved.time_to_obs_end());
}

#[test]
fn before_observation_start_fixings_are_ignored() {
    let swap = january_2012();
    let history = weekday_fixings(date(2011, 11, 1), date(2011, 12, 14));
    let resolved = swap.to_derivative(&utc(2011, 12, 15), &history).unwrap();
    assert!(resolved.observations().is_empty());
    assert_eq!(resolved.n_obs_disrupted(), 0);
}

// ─── Inside the observation window ───────────────────────────────────────────

#[test]
fn realized_slice_excludes_valuation_date_and_earlier_history() {
    init_tracing();
    let swap = january_2012();
    let series = weekday_fixings(date(2011, 12, 26), date(2012, 1, 13));
    let resolved = swap.to_derivative(&utc(2012, 1, 9), &series).unwrap();

    // Jan 2..6 only
    assert_eq!(resolved.observations(), &[102.0, 103.0, 104.0, 105.0, 106.0]);
    assert_eq!(resolved.n_obs_actual(), 5);
    // Good days Jan 2..9 inclusive = 6; the valuation day has no fixing yet.
    assert_eq!(resolved.n_obs_disrupted(), 1);
}

#[test]
fn missing_fixings_count_as_disrupted() {
    let swap = january_2012();
    let mut series = weekday_fixings(date(2012, 1, 3), date(2012, 1, 6));
    series.insert(date(2012, 1, 10), 110.0);
    // Jan 2 and Jan 9 missing; Jan 11 is the valuation day.
    let resolved = swap.to_derivative(&utc(2012, 1, 11), &series).unwrap();
    assert_eq!(resolved.n_obs_actual(), 5);
    // Good days Jan 2..11 = 8
    assert_eq!(resolved.n_obs_disrupted(), 3);
}

#[test]
fn holidays_are_not_expected_observations() {
    let cal = BespokeCalendar::with_holidays("Exchange", [date(2012, 1, 16)]);
    let swap = january_2012_on(Arc::new(cal));
    assert_eq!(swap.n_obs_expected(), 21);

    let weekdays = weekday_fixings(date(2012, 1, 2), date(2012, 1, 17));
    assert!(weekdays.get(&date(2012, 1, 16)).is_some());
    // Drop the holiday fixing: the exchange was closed.
    let series: TimeSeries<NaiveDate, f64> = weekdays
        .iter()
        .filter(|(d, _)| **d != date(2012, 1, 16))
        .map(|(d, v)| (*d, *v))
        .collect();
    let resolved = swap.to_derivative(&utc(2012, 1, 18), &series).unwrap();
    assert_eq!(resolved.n_obs_actual(), 11);
    // Good days Jan 2..18 without the 16th = 12
    assert_eq!(resolved.n_obs_disrupted(), 1);
}

#[test]
fn more_fixings_than_good_days_is_inconsistent() {
    let swap = january_2012();
    // Fixings on every calendar day, weekends included.
    let series: TimeSeries<NaiveDate, f64> = date(2012, 1, 2)
        .iter_days()
        .take(7)
        .map(|d| (d, 100.0))
        .collect();
    let err = swap.to_derivative(&utc(2012, 1, 9), &series).unwrap_err();
    assert!(matches!(err, Error::DataInconsistency(_)), "{err}");
}

#[test]
fn resolution_after_the_window_is_not_capped() {
    let swap = january_2012();
    // A full January of fixings plus Feb 1..6, which lie past the window.
    let series = weekday_fixings(date(2012, 1, 2), date(2012, 2, 6));
    let resolved = swap.to_derivative(&utc(2012, 2, 10), &series).unwrap();

    assert_eq!(resolved.n_obs_expected(), 22);
    // Jan 2..31 (22) and Feb 1, 2, 3, 6
    assert_eq!(resolved.n_obs_actual(), 26);
    // Good days Jan 2..Feb 10 = 30
    assert_eq!(resolved.n_obs_disrupted(), 4);
    assert!(resolved.time_to_obs_end() < 0.0);
    assert!(resolved.time_to_settlement() < 0.0);
}

#[test]
fn schedule_offsets_are_signed() {
    let swap = january_2012();
    let resolved = swap
        .to_derivative(&utc(2012, 1, 16), &weekday_fixings(date(2012, 1, 2), date(2012, 1, 13)))
        .unwrap();
    assert_relative_eq!(resolved.time_to_obs_start(), -14.0 / 366.0, epsilon = 1e-12);
    assert_relative_eq!(resolved.time_to_obs_end(), 15.0 / 366.0, epsilon = 1e-12);
    assert_relative_eq!(resolved.time_to_settlement(), 18.0 / 366.0, epsilon = 1e-12);
}

#[test]
fn custom_time_calculator() {
    let swap = january_2012();
    let calc = DayCountTimeCalculator::new(Actual365Fixed);
    let resolved = swap
        .to_derivative_with(&utc(2012, 1, 16), &TimeSeries::new(), &calc)
        .unwrap();
    assert_relative_eq!(resolved.time_to_obs_end(), 15.0 / 365.0, epsilon = 1e-12);
    // No fixings supplied: every good day so far is disrupted.
    assert_eq!(resolved.n_obs_disrupted(), 11);
}

#[test]
fn contract_terms_are_copied_unchanged() {
    let swap = january_2012();
    let resolved = swap.to_derivative(&utc(2012, 1, 20), &TimeSeries::new()).unwrap();
    assert_eq!(resolved.var_strike(), swap.var_strike());
    assert_eq!(resolved.var_notional(), swap.var_notional());
    assert_eq!(resolved.currency(), swap.currency());
    assert_eq!(resolved.annualization_factor(), swap.annualization_factor());
    assert_eq!(resolved.n_obs_expected(), swap.n_obs_expected());
}

// ─── Independence of valuation dates ─────────────────────────────────────────

#[test]
fn batch_resolution_is_order_insensitive() {
    let swap = january_2012();
    let series = weekday_fixings(date(2012, 1, 2), date(2012, 1, 31));
    let dates = [utc(2011, 12, 30), utc(2012, 1, 10), utc(2012, 1, 25)];

    let forward = swap.to_derivatives(dates.iter(), &series).unwrap();
    let backward = swap.to_derivatives(dates.iter().rev(), &series).unwrap();
    assert_eq!(forward.len(), 3);
    for (f, b) in forward.iter().zip(backward.iter().rev()) {
        assert_eq!(f, b);
    }
    for (d, r) in dates.iter().zip(&forward) {
        assert_eq!(r, &swap.to_derivative(d, &series).unwrap());
    }
}

#[test]
fn definition_is_shareable_across_threads() {
    let swap = Arc::new(january_2012());
    let series = Arc::new(weekday_fixings(date(2012, 1, 2), date(2012, 1, 31)));
    let counts: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (3..=27)
            .step_by(6)
            .map(|day| {
                let swap = Arc::clone(&swap);
                let series = Arc::clone(&series);
                s.spawn(move || {
                    swap.to_derivative(&utc(2012, 1, day), &series)
                        .unwrap()
                        .n_obs_actual()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    // Valuation days 3, 9, 15, 21, 27
    assert_eq!(counts, vec![1, 5, 10, 15, 19]);
}

// ─── Identity ────────────────────────────────────────────────────────────────

#[test]
fn equal_definitions_hash_alike() {
    let mut set = HashSet::new();
    set.insert(january_2012());
    set.insert(january_2012());
    assert_eq!(set.len(), 1);

    // A calendar with the same name but its own type is a different calendar.
    let lookalike = january_2012_on(Arc::new(BespokeCalendar::new("Weekends Only")));
    assert!(!set.contains(&lookalike));
}

#[test]
fn calendars_with_different_holidays_are_different_contracts() {
    let plain = january_2012_on(Arc::new(BespokeCalendar::new("Exchange")));
    let mlk = january_2012_on(Arc::new(BespokeCalendar::with_holidays(
        "Exchange",
        [date(2012, 1, 16)],
    )));
    assert_ne!(plain, mlk);
    assert_eq!(plain.n_obs_expected(), 22);
    assert_eq!(mlk.n_obs_expected(), 21);

    let valuation = utc(2012, 1, 20);
    let a = plain.to_derivative(&valuation, &TimeSeries::new()).unwrap();
    let b = mlk.to_derivative(&valuation, &TimeSeries::new()).unwrap();
    assert_eq!(a.n_obs_disrupted(), 15);
    assert_eq!(b.n_obs_disrupted(), 14);

    // Equal content held in separate allocations is still the same calendar.
    let twin = january_2012_on(Arc::new(BespokeCalendar::with_holidays(
        "Exchange",
        [date(2012, 1, 16)],
    )));
    assert_eq!(mlk, twin);
    let mut set = HashSet::new();
    set.insert(mlk);
    assert!(set.contains(&twin));
    assert!(!set.contains(&plain));
}

#[test]
fn instrument_maturity_is_settlement() {
    let swap = january_2012();
    assert_eq!(swap.maturity_date(), utc(2012, 2, 3));
    assert!(!swap.is_expired(&utc(2012, 1, 31)));
}
