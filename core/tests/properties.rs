//! Property-based tests for scheduling, pricing and game bookkeeping.

use proptest::prelude::*;

use briefcase_core::*;

/// Strategy: a board of 2..40 non-negative cash values.
fn values_strategy() -> impl Strategy<Value = Vec<Cash>> {
    prop::collection::vec(0.0..2_000_000.0f64, 2..40)
}

/// Strategy: boards mixing random values with repeating decimals whose sums
/// do not round exactly.
fn decimal_values_strategy() -> impl Strategy<Value = Vec<Cash>> {
    prop_oneof![
        values_strategy(),
        prop::collection::vec(prop::sample::select(vec![0.1, 0.2, 0.3, 0.7, 1.1]), 2..40),
    ]
}

/// Plays one game to the end, picking moves from `choices` in turn.
/// Calls `check` after every move.
fn play_round(engine: &mut GameEngine, choices: &[usize], mut check: impl FnMut(&GameEngine)) {
    let mut picks = choices.iter().copied().cycle();
    loop {
        let pick = picks.next().unwrap_or(0);
        match engine.phase() {
            GamePhase::Selecting => engine.choose_case(pick % engine.size()).unwrap(),
            GamePhase::Revealing => {
                let closed: Vec<CaseIndex> = (0..engine.size())
                    .filter(|&i| engine.case_state(i) == Ok(CaseState::Closed))
                    .collect();
                engine.open_case(closed[pick % closed.len()]).unwrap();
            }
            GamePhase::OfferPending => {
                if pick % 4 == 0 {
                    engine.accept_offer().unwrap();
                } else {
                    engine.decline_offer().unwrap();
                }
            }
            GamePhase::FinalChoice => {
                let index = if pick % 2 == 0 {
                    engine.chosen_case().unwrap()
                } else {
                    engine.final_alternative().unwrap()
                };
                engine.choose_final_case(index).unwrap();
            }
            GamePhase::Settled => return,
        }
        check(engine);
    }
}

proptest! {
    // 1. Reveal batches cover every case except the held one and the last one
    #[test]
    fn schedule_reveals_all_but_two(size in 2usize..600) {
        let schedule = Schedule::for_board(size);
        let revealed: usize = schedule.batches().iter().sum();
        prop_assert_eq!(revealed, size - 2);
    }

    // 2. Thresholds strictly increase
    #[test]
    fn schedule_strictly_increasing(size in 2usize..600) {
        let schedule = Schedule::for_board(size);
        for pair in schedule.thresholds().windows(2) {
            prop_assert!(pair[0] < pair[1], "thresholds={:?}", schedule.thresholds());
        }
    }

    // 3. Batches form a staircase k, k-1, .., 1 followed by single reveals
    #[test]
    fn schedule_staircase_shape(size in 2usize..600) {
        let schedule = Schedule::for_board(size);
        let height = staircase_height(size - 2);
        for (i, &batch) in schedule.batches().iter().enumerate() {
            let expected = if i < height { height - i } else { 1 };
            prop_assert_eq!(batch, expected, "size={} batches={:?}", size, schedule.batches());
        }
        prop_assert_eq!(
            schedule.final_stage() as usize,
            size + schedule.rounds() - 2
        );
    }

    // 4. Offers never leave [0, max]
    #[test]
    fn offer_within_bounds(values in prop::collection::vec(0.0..2_000_000.0f64, 1..40)) {
        let max = values.iter().copied().fold(0.0, f64::max);
        let offer = offer_for_values(values).unwrap();
        prop_assert!(offer.is_finite());
        prop_assert!((0.0..=max).contains(&offer), "offer={} max={}", offer, max);
    }

    // 4b. The engine's offer never leaves [0, max] either, nor does what it pays out
    #[test]
    fn engine_offer_within_bounds(
        values in decimal_values_strategy(),
        choices in prop::collection::vec(any::<usize>(), 1..16),
    ) {
        let mut engine = GameEngine::with_assignment(values.clone(), 0).unwrap();
        let mut max_seen = values.iter().copied().fold(0.0, f64::max);
        play_round(&mut engine, &choices, |engine| {
            if engine.is_done() {
                let stats = engine.statistics();
                assert!(stats.earnings <= max_seen, "earnings={} max={}", stats.earnings, max_seen);
                assert!(stats.possible_earnings <= max_seen);
                return;
            }
            let max = (0..values.len())
                .filter(|&i| engine.case_state(i) != Ok(CaseState::Opened))
                .map(|i| values[i])
                .fold(0.0, f64::max);
            let offer = engine.current_offer();
            assert!(offer.is_finite());
            assert!((0.0..=max).contains(&offer), "offer={} max={}", offer, max);
            max_seen = max;
        });
    }

    // 5. The remaining pool always matches the unopened cases
    #[test]
    fn remaining_pool_tracks_unopened_cases(
        values in values_strategy(),
        choices in prop::collection::vec(any::<usize>(), 1..16),
    ) {
        let mut engine = GameEngine::with_assignment(values.clone(), 0).unwrap();
        play_round(&mut engine, &choices, |engine| {
            if engine.is_done() {
                return;
            }
            let unopened: Vec<Cash> = (0..values.len())
                .filter(|&i| engine.case_state(i) != Ok(CaseState::Opened))
                .map(|i| values[i])
                .collect();
            let mean = unopened.iter().sum::<Cash>() / unopened.len() as Cash;
            let engine_mean = engine.remaining_total() / engine.remaining_count() as Cash;

            assert_eq!(engine.remaining_count(), unopened.len());
            assert!(engine.remaining_count() >= 2);
            assert!((engine_mean - mean).abs() <= 1e-6 * mean.max(1.0));
        });
        prop_assert!(engine.is_done());
    }

    // 6. Repeated offers agree until the state changes
    #[test]
    fn current_offer_is_idempotent(
        values in values_strategy(),
        choices in prop::collection::vec(any::<usize>(), 1..16),
    ) {
        let mut engine = GameEngine::with_assignment(values, 0).unwrap();
        play_round(&mut engine, &choices, |engine| {
            assert_eq!(engine.current_offer(), engine.current_offer());
        });
    }

    // 7. Running totals never decrease and seeding adds exactly the prior totals
    #[test]
    fn totals_are_monotonic(
        seed in any::<u64>(),
        size in 2usize..30,
        prior in (0.0..1_000_000.0f64, 0.0..1_000_000.0f64),
        choices in prop::collection::vec(any::<usize>(), 1..16),
    ) {
        let values: Vec<Cash> = (1..=size).map(|v| v as Cash * 100.0).collect();
        let config = BoardConfig::new(values).unwrap();
        let mut engine = GameEngine::new(config, seed);

        engine.seed_totals(PriorTotals::new(prior.0, prior.1).unwrap()).unwrap();
        let seeded = engine.statistics();
        prop_assert_eq!(seeded.total_earnings, prior.0);
        prop_assert_eq!(seeded.total_possible_earnings, prior.1);

        let mut last = seeded;
        for _ in 0..3 {
            play_round(&mut engine, &choices, |_| {});
            let stats = engine.statistics();
            prop_assert!(stats.total_earnings >= last.total_earnings);
            prop_assert!(stats.total_possible_earnings >= last.total_possible_earnings);
            prop_assert!(stats.earnings <= stats.possible_earnings);
            last = stats;
            engine.start_new_game();
        }
    }

    // 8. Every player action advances the stage counter by exactly one
    #[test]
    fn stage_counter_advances_by_one(
        values in values_strategy(),
        choices in prop::collection::vec(any::<usize>(), 1..16),
    ) {
        let mut engine = GameEngine::with_assignment(values, 0).unwrap();
        let mut expected = 0;
        play_round(&mut engine, &choices, |engine| {
            assert_eq!(engine.stage_counter(), Some(expected));
            expected += 1;
        });
    }
}
