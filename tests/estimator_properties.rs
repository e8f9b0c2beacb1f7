//! Property tests for the revenue-loss estimator.
//!
//! Validates that:
//! 1. Non-negative inputs always give finite, non-negative metrics
//! 2. Unset and zero fields compute exactly like the defaults
//! 3. Raising any single input from its resolved value never lowers the
//!    weekly loss (a stored 0 resolves to the default, so 0 -> 1 can drop it)
//! 4. Cumulative loss is weekly loss times weeks to fill
//! 5. Break-even is fee / weekly loss, undefined at zero

use chair_loss::model::inputs::{
    InputDefaults, MAX_AVERAGE_TICKET, MAX_CLIENTS_PER_DAY, MAX_EMPTY_CHAIRS, MAX_WEEKS_TO_FILL,
};
use chair_loss::{break_even_weeks, compute, BreakEven, DaysOpen, Field, InputSet};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;

fn arb_input() -> impl Strategy<Value = InputSet> {
    (
        proptest::option::of(0.0f64..=MAX_AVERAGE_TICKET),
        proptest::option::of(0.0f64..=MAX_CLIENTS_PER_DAY),
        proptest::option::of(0u32..=MAX_EMPTY_CHAIRS),
        3u8..=7,
        proptest::option::of(0.0f64..=MAX_WEEKS_TO_FILL),
    )
        .prop_map(|(ticket, clients, chairs, days, weeks)| InputSet {
            average_ticket: ticket,
            clients_per_day: clients,
            empty_chairs: chairs,
            days_open: DaysOpen::clamped(days),
            weeks_to_fill: weeks,
        })
}

fn arb_field() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

proptest! {
    #[test]
    fn metrics_are_finite_and_non_negative(input in arb_input()) {
        let m = compute(&input);
        for v in m.values() {
            prop_assert!(v.is_finite());
            prop_assert!(v >= 0.0);
        }
    }

    #[test]
    fn cumulative_is_weekly_times_weeks(input in arb_input()) {
        let m = compute(&input);
        let weeks = input.resolve(&InputDefaults::default()).weeks_to_fill;
        prop_assert_eq!(m.cumulative_loss, m.lost_revenue_per_week * weeks);
    }

    /// Raises start from the resolved value, so a field never moves off the
    /// zero sentinel into a value below its default.
    #[test]
    fn raising_one_field_never_lowers_weekly_loss(
        input in arb_input(),
        field in arb_field(),
        bump in 0.0f64..500.0,
    ) {
        let current = input.resolve(&InputDefaults::default());
        let raised_value = match field {
            Field::AverageTicket => current.average_ticket + bump,
            Field::ClientsPerDay => current.clients_per_day + bump,
            Field::EmptyChairs => f64::from(current.empty_chairs) + bump.floor(),
            Field::DaysOpen => f64::from(current.days_open.get()) + bump.floor(),
            Field::WeeksToFill => current.weeks_to_fill + bump,
        }
        .min(field.max_value());
        let raised = input.try_with_field(field, Some(raised_value)).unwrap();

        prop_assert!(
            compute(&raised).lost_revenue_per_week >= compute(&input).lost_revenue_per_week
        );
    }

    #[test]
    fn break_even_matches_division(fee in 0.0f64..100_000.0, lost in 0.01f64..50_000.0) {
        prop_assert_eq!(break_even_weeks(fee, lost), BreakEven::Weeks(fee / lost));
    }
}

#[test]
fn all_unset_equals_explicit_defaults() {
    let explicit = InputSet::from_defaults(&InputDefaults::default());
    let zeroed = InputSet {
        average_ticket: Some(0.0),
        clients_per_day: Some(0.0),
        empty_chairs: Some(0),
        days_open: DaysOpen::default(),
        weeks_to_fill: Some(0.0),
    };

    let m = compute(&explicit);
    assert_eq!(compute(&InputSet::default()), m);
    assert_eq!(compute(&zeroed), m);

    assert_eq!(m.weekly_revenue_per_chair, 2125.0);
    assert_eq!(m.lost_revenue_per_week, 2125.0);
    assert_eq!(m.cumulative_loss, 17000.0);
    assert!((m.monthly_loss - 9201.25).abs() < 1e-6);
    assert_eq!(m.yearly_loss, 110500.0);
}

#[test]
fn leaving_the_zero_sentinel_can_lower_the_loss() {
    let zero = InputSet::default()
        .try_with_field(Field::AverageTicket, Some(0.0))
        .unwrap();
    let one = zero.try_with_field(Field::AverageTicket, Some(1.0)).unwrap();

    assert_eq!(compute(&zero).lost_revenue_per_week, 2125.0);
    assert_eq!(compute(&one).lost_revenue_per_week, 25.0);
}

#[test]
fn values_at_the_caps_stay_finite() {
    let input = InputSet {
        average_ticket: Some(MAX_AVERAGE_TICKET),
        clients_per_day: Some(MAX_CLIENTS_PER_DAY),
        empty_chairs: Some(MAX_EMPTY_CHAIRS),
        days_open: DaysOpen::clamped(7),
        weeks_to_fill: Some(MAX_WEEKS_TO_FILL),
    };
    assert!(compute(&input).values().iter().all(|v| v.is_finite()));
}

#[test]
fn zero_weekly_loss_has_undefined_break_even() {
    assert_eq!(break_even_weeks(1500.0, 0.0), BreakEven::Undefined);
}

#[test]
fn seeded_walk_is_monotone_in_every_field() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut input = InputSet::from_defaults(&InputDefaults::default())
        .with_days_open(DaysOpen::clamped(3));
    let mut last = compute(&input).lost_revenue_per_week;

    for _ in 0..500 {
        let field = Field::ALL[rng.gen_range(0..Field::ALL.len())];
        let current = input.get(field).unwrap_or(0.0);
        let next = match field {
            Field::EmptyChairs | Field::DaysOpen => current + f64::from(rng.gen_range(0u8..2)),
            _ => current + rng.gen_range(0.0..5.0),
        };
        input = input.try_with_field(field, Some(next)).unwrap();

        let lost = compute(&input).lost_revenue_per_week;
        assert!(lost >= last, "{field} raised to {next} lowered loss {last} -> {lost}");
        last = lost;
    }
}
