//! Property tests for the step sequencer and the quantity scaler

use klynk_core::model::CookingStep;
use klynk_core::scaling::{scale, scale_quantity, QuantityScaler, ScaleError, Servings};
use klynk_core::sequencer::StepSequencer;
use klynk_core::state::Event;
use proptest::prelude::*;

fn steps_strategy() -> impl Strategy<Value = Vec<CookingStep>> {
    prop::collection::vec(0u32..20, 1..8).prop_map(|durations| {
        durations
            .into_iter()
            .enumerate()
            .map(|(i, d)| {
                CookingStep::new(i as u32 + 1, i as u16 + 1, format!("Step {}", i + 1))
                    .with_duration(d)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn next_on_last_and_previous_on_first_are_noops(steps in steps_strategy()) {
        let count = steps.len();
        let mut seq = StepSequencer::new(steps).unwrap();

        prop_assert_eq!(seq.go_to_previous(), None);
        prop_assert_eq!(seq.current_index(), 0);

        for _ in 0..count {
            seq.go_to_next();
        }
        prop_assert_eq!(seq.current_index(), count - 1);
        prop_assert_eq!(seq.go_to_next(), None);
        prop_assert_eq!(seq.current_index(), count - 1);
    }

    #[test]
    fn entering_a_step_loads_its_full_duration(steps in steps_strategy(), moves in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut seq = StepSequencer::new(steps).unwrap();
        for forward in moves {
            // Run the timer a little before moving so there is state to discard
            seq.toggle_timer();
            seq.tick();

            let changed = if forward { seq.go_to_next() } else { seq.go_to_previous() };
            if changed.is_some() {
                let step = seq.current_step().clone();
                prop_assert_eq!(seq.remaining_s(), step.duration_s);
                prop_assert!(!seq.is_active());
                prop_assert!(!seq.is_auto_advance_pending());
            }
        }
    }

    #[test]
    fn countdown_never_negative_and_advances_once(duration in 1u32..30, extra_ticks in 0u32..10) {
        let steps = vec![
            CookingStep::new(1, 1, "Timed").with_duration(duration),
            CookingStep::new(2, 2, "Next"),
            CookingStep::new(3, 3, "Last"),
        ];
        let mut seq = StepSequencer::new(steps).unwrap();
        seq.toggle_timer();

        let mut advances = 0;
        for _ in 0..(duration + 1 + extra_ticks) {
            if let Some(Event::StepChanged { .. }) = seq.tick() {
                advances += 1;
            }
            if let Some(remaining) = seq.remaining_s() {
                prop_assert!(remaining <= duration);
            }
        }

        prop_assert_eq!(advances, 1);
        prop_assert_eq!(seq.current_index(), 1);
    }

    #[test]
    fn same_servings_reproduces_formatted_base(q in 0.01f64..500.0, s in 1u16..50) {
        let servings = Servings::new(s).unwrap();
        prop_assert_eq!(scale(q, servings, servings), QuantityScaler::default().format(q));
    }

    #[test]
    fn zero_servings_always_rejected(q in 0.01f64..500.0, s in 0u16..50) {
        prop_assert_eq!(scale_quantity(q, 0, s), Err(ScaleError::ZeroServings));
        prop_assert_eq!(scale_quantity(q, s, 0), Err(ScaleError::ZeroServings));
    }

    #[test]
    fn scaling_is_deterministic(q in 0.01f64..500.0, base in 1u16..20, target in 1u16..20) {
        let first = scale_quantity(q, base, target);
        let second = scale_quantity(q, base, target);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }
}

#[test]
fn tick_sequence_from_three() {
    let steps = vec![
        CookingStep::new(1, 1, "Three seconds").with_duration(3),
        CookingStep::new(2, 2, "After"),
    ];
    let mut seq = StepSequencer::new(steps).unwrap();
    seq.toggle_timer();

    let mut observed = Vec::new();
    for _ in 0..3 {
        seq.tick();
        observed.push((seq.remaining_s(), seq.is_active()));
    }

    assert_eq!(
        observed,
        vec![(Some(2), true), (Some(1), true), (Some(0), false)]
    );
}

#[test]
fn documented_examples() {
    assert_eq!(scale_quantity(1.0, 4, 2).unwrap(), "1/2");
    assert_eq!(scale_quantity(2.0, 4, 8).unwrap(), "4");
}
