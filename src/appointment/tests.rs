//! Property-based suite for appointments and the conflict sweep.

use super::*;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Minutes past midnight on the base day.
fn at(minutes: i64) -> NaiveDateTime {
    base() + TimeDelta::minutes(minutes)
}

fn arb_interval() -> impl Strategy<Value = Interval> {
    (0i64..600, 1i64..120, "[a-z]{0,8}").prop_map(|(start, length, label)| {
        Interval::new(at(start), at(start + length), label).unwrap()
    })
}

fn arb_agenda() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(arb_interval(), 0..40)
}

type Span = (NaiveDateTime, NaiveDateTime);

/// Exhaustive O(n²) pairwise check.
fn naive_conflicts(intervals: &[Interval]) -> Vec<Span> {
    let mut found = Vec::new();
    for (i, a) in intervals.iter().enumerate() {
        for b in &intervals[i + 1..] {
            if a.overlaps(b) {
                found.push((a.start().max(b.start()), a.finish().min(b.finish())));
            }
        }
    }
    found.sort();
    found
}

fn spans(set: &IntervalSet) -> Vec<Span> {
    let mut spans: Vec<Span> = set.iter().map(|i| (i.start(), i.finish())).collect();
    spans.sort();
    spans
}

mod interval_laws {
    use super::*;

    proptest! {
        #[test]
        fn construction_succeeds_iff_finish_after_start(start in 0i64..1000, finish in 0i64..1000) {
            let result = Interval::new(at(start), at(finish), "x");
            prop_assert_eq!(result.is_ok(), finish > start);
        }

        #[test]
        fn equality_ignores_label(a in arb_interval(), label in ".*") {
            let relabelled = Interval::new(a.start(), a.finish(), label).unwrap();
            prop_assert_eq!(a, relabelled);
        }

        #[test]
        fn disjoint_intervals_are_ordered_exactly_one_way(a in arb_interval(), b in arb_interval()) {
            if a.overlaps(&b) {
                prop_assert!(!a.precedes(&b) && !a.follows(&b));
            } else {
                prop_assert!(a.precedes(&b) ^ a.follows(&b));
                prop_assert_eq!(a.precedes(&b), b.follows(&a));
            }
        }

        #[test]
        fn overlap_is_symmetric(a in arb_interval(), b in arb_interval()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn intersection_is_bounded_by_both(a in arb_interval(), b in arb_interval()) {
            match a.try_intersect(&b) {
                Ok(both) => {
                    prop_assert_eq!(both.start(), a.start().max(b.start()));
                    prop_assert_eq!(both.finish(), a.finish().min(b.finish()));
                    prop_assert!(both.finish() > both.start());
                    prop_assert!(both.label().contains(a.label()));
                }
                Err(err) => {
                    prop_assert!(!a.overlaps(&b));
                    let is_no_overlap = matches!(err, IntervalError::NoOverlap { .. });
                    prop_assert!(is_no_overlap);
                }
            }
        }

        #[test]
        fn format_then_parse_is_identity(a in arb_interval(), label in "[A-Za-z0-9][A-Za-z0-9 ,.!-]{0,20}[A-Za-z0-9]") {
            let a = Interval::new(a.start(), a.finish(), label).unwrap();
            let parsed: Interval = a.to_string().parse().unwrap();
            prop_assert_eq!(&parsed, &a);
            prop_assert_eq!(parsed.label(), a.label());
        }
    }
}

mod sweep {
    use super::*;

    proptest! {
        #[test]
        fn matches_exhaustive_pairwise_check(intervals in arb_agenda()) {
            let expected = naive_conflicts(&intervals);
            let mut set = IntervalSet::from(intervals);
            let conflicts = set.conflicts();
            prop_assert_eq!(spans(&conflicts), expected);
        }

        #[test]
        fn leaves_receiver_sorted_with_same_elements(intervals in arb_agenda()) {
            let mut set = IntervalSet::from(intervals.clone());
            set.conflicts();
            prop_assert_eq!(set.len(), intervals.len());
            prop_assert!(set.windows(2).all(|w| w[0].start() <= w[1].start()));
        }

        #[test]
        fn sorting_is_idempotent(intervals in arb_agenda()) {
            let mut once = IntervalSet::from(intervals);
            once.sort_by_start();
            let mut twice = once.clone();
            twice.sort_by_start();
            let labels = |s: &IntervalSet| s.iter().map(|i| i.label().to_string()).collect::<Vec<_>>();
            prop_assert_eq!(labels(&once), labels(&twice));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn every_conflict_lies_inside_two_appointments(intervals in arb_agenda()) {
            let mut set = IntervalSet::from(intervals);
            let conflicts = set.conflicts();
            for conflict in &conflicts {
                let covering = set
                    .iter()
                    .filter(|i| i.start() <= conflict.start() && conflict.finish() <= i.finish())
                    .count();
                prop_assert!(covering >= 2);
            }
        }
    }
}

mod scenarios {
    use super::*;

    fn repeated(count: i64) -> IntervalSet {
        (0..count)
            .map(|n| Interval::new(at(n * 60), at(n * 60 + 59), format!("Sample appt #{n}")).unwrap())
            .collect()
    }

    #[test]
    fn five_thousand_disjoint_have_no_conflicts() {
        let mut set = repeated(5000);
        let started = std::time::Instant::now();
        assert_eq!(set.conflicts().len(), 0);
        assert!(started.elapsed().as_secs_f64() < 2.0);
    }

    #[test]
    fn five_thousand_disjoint_in_reverse_still_have_no_conflicts() {
        let mut set: IntervalSet = repeated(5000).into_iter().rev().collect();
        assert!(set.conflicts().is_empty());
        assert_eq!(set[0].label(), "Sample appt #0");
    }

    #[test]
    fn identical_appointments_conflict_pairwise() {
        let mut set: IntervalSet = (0..4)
            .map(|n| Interval::new(at(0), at(30), n.to_string()).unwrap())
            .collect();
        // C(4, 2) pairs, all spanning the full half hour.
        let conflicts = set.conflicts();
        assert_eq!(conflicts.len(), 6);
        assert!(conflicts.iter().all(|c| *c == set[0]));
        assert_eq!(conflicts[0].label(), "0 and 1");
    }

    #[test]
    fn injected_oops_in_long_run() {
        let mut set = repeated(100);
        set.push(Interval::new(at(10 * 60 + 30), at(11 * 60 + 30), "oops").unwrap());
        set.push(Interval::new(at(50 * 60 + 30), at(50 * 60 + 59), "oops").unwrap());

        let mut conflicts = set.conflicts();
        conflicts.sort_by_start();
        let expected: IntervalSet = [
            (10 * 60 + 30, 10 * 60 + 59),
            (11 * 60, 11 * 60 + 30),
            (50 * 60 + 30, 50 * 60 + 59),
        ]
        .into_iter()
        .map(|(s, f)| Interval::new(at(s), at(f), "oops").unwrap())
        .collect();
        assert_eq!(conflicts, expected);
    }
}
