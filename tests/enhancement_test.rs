//! Enhancement system tests: schedule tables, state machine, single trials.

use awaken_sim::enhancement::{
    format_thousands, run_trial, step, Acrum, Schedule, TrialResult, TrialState,
    BASE_SUCCESS_RATES, MAX_SCHEDULE_LEVEL, MAX_TARGET_LEVEL, SLIVER_PER_ATTEMPT,
    TICKETS_PER_RECOVERY,
};
use awaken_sim::SimError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const ALL_ACRUMS: [Acrum; 3] = [Acrum::None, Acrum::V, Acrum::X];

// =========================================================================
// Acrum
// =========================================================================

#[test]
fn test_acrum_multipliers() {
    assert_eq!(Acrum::None.multiplier(), 10);
    assert_eq!(Acrum::V.multiplier(), 15);
    assert_eq!(Acrum::X.multiplier(), 20);
}

// =========================================================================
// Schedule
// =========================================================================

#[test]
fn test_standard_schedule_covers_all_levels() {
    let schedule = Schedule::standard();
    for level in 0..=MAX_SCHEDULE_LEVEL {
        assert!(
            schedule.condition(level).is_some(),
            "Level {level} should have a condition"
        );
    }
    assert!(schedule.condition(MAX_SCHEDULE_LEVEL + 1).is_none());
    assert_eq!(schedule.max_level(), Some(MAX_SCHEDULE_LEVEL));
}

#[test]
fn test_standard_conditions() {
    let schedule = Schedule::standard();
    for level in 0..=2 {
        let c = schedule.condition(level).unwrap();
        assert!(!c.uses_recovery_ticket, "Level {level} should not use tickets");
        assert_eq!(c.acrum, Acrum::None);
    }
    let c3 = schedule.condition(3).unwrap();
    assert!(!c3.uses_recovery_ticket);
    assert_eq!(c3.acrum, Acrum::V);
    let c4 = schedule.condition(4).unwrap();
    assert!(c4.uses_recovery_ticket);
    assert_eq!(c4.acrum, Acrum::V);
    for level in 5..=10 {
        let c = schedule.condition(level).unwrap();
        assert!(c.uses_recovery_ticket, "Level {level} should use tickets");
        assert_eq!(c.acrum, Acrum::X);
    }
}

#[test]
fn test_base_rates() {
    let schedule = Schedule::standard();
    assert_eq!(BASE_SUCCESS_RATES, [80, 60, 40, 20, 10, 7, 6, 3, 1, 1, 1]);
    assert_eq!(schedule.base_rate(0), 80);
    assert_eq!(schedule.base_rate(5), 7);
    assert_eq!(schedule.base_rate(11), 0);
}

#[test]
fn test_probability_truncates() {
    let schedule = Schedule::standard();
    assert_eq!(schedule.success_probability(5, Acrum::X), 14);
    assert_eq!(schedule.success_probability(5, Acrum::V), 10); // 10.5
    assert_eq!(schedule.success_probability(8, Acrum::V), 1); // 1.5
    assert_eq!(schedule.success_probability(3, Acrum::V), 30);
    assert_eq!(schedule.success_probability(4, Acrum::V), 15);
    assert_eq!(schedule.success_probability(11, Acrum::X), 0);
}

#[test]
fn test_probability_always_a_percentage() {
    let schedule = Schedule::standard();
    for level in 0..=MAX_SCHEDULE_LEVEL {
        for acrum in ALL_ACRUMS {
            let p = schedule.success_probability(level, acrum);
            assert!(p <= 100, "Level {level} {acrum:?} gave {p}%");
        }
    }
}

#[test]
fn test_every_reachable_level_can_succeed() {
    let schedule = Schedule::standard();
    for level in 0..MAX_TARGET_LEVEL {
        let condition = schedule.condition(level).unwrap();
        assert!(
            schedule.success_probability(level, condition.acrum) > 0,
            "Level {level} must have a nonzero success chance"
        );
    }
}

// =========================================================================
// step()
// =========================================================================

#[test]
fn test_step_keeps_level_in_range() {
    let schedule = Schedule::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut state = TrialState::new();
    let mut last_attempts = 0;
    for _ in 0..5_000 {
        if state.level >= MAX_TARGET_LEVEL {
            state.level = 0;
        }
        step(&mut state, &schedule, &mut rng).unwrap();
        assert!(state.level <= MAX_SCHEDULE_LEVEL);
        assert_eq!(state.attempt_count, last_attempts + 1);
        last_attempts = state.attempt_count;
    }
}

#[test]
fn test_step_level_moves_at_most_one() {
    let schedule = Schedule::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut state = TrialState {
        level: 6,
        ..TrialState::new()
    };
    for _ in 0..500 {
        let before = state.level;
        step(&mut state, &schedule, &mut rng).unwrap();
        assert!(state.level.abs_diff(before) <= 1);
        if state.level >= MAX_TARGET_LEVEL || state.level < 5 {
            state.level = 6;
        }
    }
}

#[test]
fn test_tickets_only_spent_on_ticket_levels() {
    let schedule = Schedule::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut state = TrialState::new();
    // Levels 0-3 never spend tickets
    for _ in 0..1_000 {
        if state.level > 3 {
            state.level = 0;
        }
        step(&mut state, &schedule, &mut rng).unwrap();
    }
    assert_eq!(state.recovery_tickets_used, 0);
}

#[test]
fn test_step_errors_past_schedule() {
    let schedule = Schedule::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut state = TrialState {
        level: MAX_SCHEDULE_LEVEL + 1,
        ..TrialState::new()
    };
    assert_eq!(
        step(&mut state, &schedule, &mut rng),
        Err(SimError::ConditionNotFound(11))
    );
}

// =========================================================================
// run_trial()
// =========================================================================

#[test]
fn test_trial_reaches_every_target() {
    let schedule = Schedule::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    for target in 1..=MAX_TARGET_LEVEL {
        let result = run_trial(target, &schedule, &mut rng).unwrap();
        assert!(result.attempt_count >= target as u64);
        assert!(result.attempt_count >= 1);
    }
}

#[test]
fn test_trial_acrum_usage_bounded_by_attempts() {
    let schedule = Schedule::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(31337);
    for _ in 0..20 {
        let r = run_trial(7, &schedule, &mut rng).unwrap();
        assert!(r.acrum_v_uses + r.acrum_x_uses <= r.attempt_count);
        assert!(r.acrum_v_uses >= 2, "Levels 3 and 4 are always attempted");
        assert!(r.acrum_x_uses >= 2, "Levels 5 and 6 are always attempted");
        assert!(r.recovery_tickets_used <= r.attempt_count);
    }
}

#[test]
fn test_low_target_never_uses_acrum_or_tickets() {
    let schedule = Schedule::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..100 {
        let r = run_trial(3, &schedule, &mut rng).unwrap();
        assert_eq!(r.acrum_v_uses, 0);
        assert_eq!(r.acrum_x_uses, 0);
        assert_eq!(r.recovery_tickets_used, 0);
    }
}

#[test]
fn test_trial_is_reproducible_with_seed() {
    let schedule = Schedule::standard();
    let a = run_trial(6, &schedule, &mut ChaCha8Rng::seed_from_u64(777)).unwrap();
    let b = run_trial(6, &schedule, &mut ChaCha8Rng::seed_from_u64(777)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_trial_rejects_level_ten() {
    let schedule = Schedule::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(matches!(
        run_trial(10, &schedule, &mut rng),
        Err(SimError::InvalidMaxLevel { level: 10, max: 9 })
    ));
}

// =========================================================================
// TrialResult
// =========================================================================

#[test]
fn test_resource_totals() {
    let r = TrialResult {
        attempt_count: 12,
        recovery_tickets_used: 3,
        acrum_v_uses: 0,
        acrum_x_uses: 0,
    };
    assert_eq!(r.sliver_used(), 12 * SLIVER_PER_ATTEMPT);
    assert_eq!(r.sliver_used(), 6_000_000);
    assert_eq!(r.recovery_ticket_cost(), 3 * TICKETS_PER_RECOVERY);
    assert_eq!(r.recovery_ticket_cost(), 600);
}

#[test]
fn test_from_state_snapshot() {
    let state = TrialState {
        attempt_count: 40,
        level: 5,
        recovery_tickets_used: 6,
        acrum_v_uses: 4,
        acrum_x_uses: 9,
    };
    let r = TrialResult::from(&state);
    assert_eq!(r.attempt_count, 40);
    assert_eq!(r.recovery_tickets_used, 6);
    assert_eq!(r.acrum_v_uses, 4);
    assert_eq!(r.acrum_x_uses, 9);
}

#[test]
fn test_display_uses_thousands_separators() {
    let r = TrialResult {
        attempt_count: 2_500,
        recovery_tickets_used: 1_234,
        acrum_v_uses: 7,
        acrum_x_uses: 1_001,
    };
    let text = r.to_string();
    assert!(text.contains("2500"));
    assert!(text.contains("1,250,000,000"));
    assert!(text.contains("246,800"));
    assert!(text.contains("1001"));
}

#[test]
fn test_format_thousands() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1_000), "1,000");
    assert_eq!(format_thousands(500_000), "500,000");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
}
