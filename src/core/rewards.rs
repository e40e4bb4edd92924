//! Trivia answer resolution: XP, cred and level deltas for one answer.
//!
//! Pure arithmetic over the agent's progression state and the session's
//! streak counters. The caller (see [`crate::session`]) maintains the
//! counters; this module only turns them into economic outcomes.

use crate::agent::Agent;
use crate::core::constants::*;

/// Economic outcome of a single trivia answer, for the result display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRewards {
    pub xp_gained: u64,
    /// Negative on an incorrect answer (creds lost, floored at the balance).
    pub creds_delta: i64,
    pub leveled_up: bool,
    /// Multiplier that was applied to gains (1 when no boost was active).
    pub multiplier: u64,
}

/// XP threshold to advance past the given level.
pub fn xp_for_next_level(level: u32) -> u64 {
    (XP_CURVE_BASE * f64::powf(level as f64, XP_CURVE_EXPONENT)).ceil() as u64
}

/// Reward multiplier currently in force: an active XP booster and a bonus
/// round each double gains, and they stack.
pub fn reward_multiplier(agent: &Agent, bonus_round: bool, now_ms: i64) -> u64 {
    let mut multiplier = 1;
    if agent.active_effects.booster_active(now_ms) {
        multiplier *= REWARD_BOOST_MULTIPLIER;
    }
    if bonus_round {
        multiplier *= REWARD_BOOST_MULTIPLIER;
    }
    multiplier
}

/// XP gained for a correct answer at the given session streak (the streak
/// value counted after this answer, so the first correct answer is streak 1).
pub fn xp_for_correct(session_streak: u32) -> u64 {
    XP_PER_CORRECT_BASE + XP_PER_STREAK_STEP * session_streak as u64
}

/// Creds gained for a correct answer at the given session streak.
pub fn creds_for_correct(session_streak: u32) -> u64 {
    CREDS_PER_CORRECT_BASE + CREDS_PER_STREAK_STEP * session_streak.saturating_sub(1) as u64
}

/// Creds lost for an incorrect answer at the given penalty level, before
/// flooring at the agent's balance.
pub fn penalty_for_incorrect(penalty_level: u32) -> u64 {
    CREDS_PENALTY_BASE + CREDS_PENALTY_STEP * penalty_level.saturating_sub(1) as u64
}

/// Applies the outcome of one trivia answer to the agent.
///
/// `session_streak` and `penalty_level` are the counter values after this
/// answer (the session increments the relevant one first). Level advances by
/// at most one per answer even if the new XP total crosses several
/// thresholds; the overall streak counter is incremented on correct and
/// reset on incorrect. Total over its numeric domain.
pub fn apply_answer(
    agent: &mut Agent,
    correct: bool,
    session_streak: u32,
    penalty_level: u32,
    bonus_round: bool,
    now_ms: i64,
) -> AnswerRewards {
    agent.touch(now_ms);

    if !correct {
        let loss = penalty_for_incorrect(penalty_level).min(agent.creds);
        agent.creds -= loss;
        agent.streak = 0;
        return AnswerRewards {
            xp_gained: 0,
            creds_delta: -(loss as i64),
            leveled_up: false,
            multiplier: 1,
        };
    }

    let multiplier = reward_multiplier(agent, bonus_round, now_ms);
    let xp_gained = xp_for_correct(session_streak) * multiplier;
    let creds_gained = creds_for_correct(session_streak) * multiplier;

    agent.xp += xp_gained;
    agent.creds += creds_gained;
    agent.streak += 1;

    // At most one level per answer, even when the total crosses
    // several thresholds at once.
    let leveled_up = agent.xp >= xp_for_next_level(agent.level);
    if leveled_up {
        agent.level += 1;
    }

    AnswerRewards {
        xp_gained,
        creds_delta: creds_gained as i64,
        leveled_up,
        multiplier,
    }
}
