use super::types::*;
use crate::error::{Result, SimError};
use rand::Rng;

/// Roll a d100 and compare against a whole-percent chance.
pub fn challenge<R: Rng>(probability: u32, rng: &mut R) -> bool {
    let roll: u32 = rng.gen_range(1..=100);
    roll <= probability
}

/// Make one enhancement attempt from the state's current level.
///
/// Success moves up one level. Failure above level 0 drops one level, and on
/// levels that spend a recovery ticket the drop may be cancelled. Acrum usage
/// is counted whether or not the attempt succeeds.
pub fn step<R: Rng>(state: &mut TrialState, schedule: &Schedule, rng: &mut R) -> Result<()> {
    let level = state.level;
    let condition = *schedule
        .condition(level)
        .ok_or(SimError::ConditionNotFound(level))?;

    state.attempt_count += 1;

    let probability = schedule.success_probability(level, condition.acrum);
    if challenge(probability, rng) {
        state.level = level + 1;
    } else if level > 0 {
        state.level = level - 1;
        if condition.uses_recovery_ticket {
            recover(state, level, rng);
        }
    }

    match condition.acrum {
        Acrum::None => {}
        Acrum::V => state.acrum_v_uses += 1,
        Acrum::X => state.acrum_x_uses += 1,
    }

    Ok(())
}

/// Spend a recovery ticket; on a successful roll restore `previous_level`.
pub fn recover<R: Rng>(state: &mut TrialState, previous_level: u8, rng: &mut R) {
    state.recovery_tickets_used += 1;
    if challenge(RECOVERY_CHANCE, rng) {
        state.level = previous_level;
    }
}

/// Reject targets outside `1..=MAX_TARGET_LEVEL`.
pub fn validate_target(target_level: u8) -> Result<()> {
    if target_level == 0 || target_level > MAX_TARGET_LEVEL {
        return Err(SimError::InvalidMaxLevel {
            level: target_level,
            max: MAX_TARGET_LEVEL,
        });
    }
    Ok(())
}

/// Enhance from level 0 until `target_level` is reached.
pub fn run_trial<R: Rng>(target_level: u8, schedule: &Schedule, rng: &mut R) -> Result<TrialResult> {
    if target_level > MAX_TARGET_LEVEL {
        return Err(SimError::InvalidMaxLevel {
            level: target_level,
            max: MAX_TARGET_LEVEL,
        });
    }

    let mut state = TrialState::new();
    while state.level < target_level {
        step(&mut state, schedule, rng)?;
    }
    Ok(TrialResult::from(&state))
}
