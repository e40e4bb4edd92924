//! Integration test: trivia reward economy across a session.
//!
//! Drives TriviaSession against a live agent the way the quiz loop does
//! and checks the combined effect of streaks, penalties, level pacing,
//! bonus rounds and an activated XP booster.

use brain_heist::core::constants::{BONUS_ROUND_INTERVAL, STARTING_CREDS, XP_BOOSTER_DURATION_MS};
use brain_heist::core::rewards::xp_for_next_level;
use brain_heist::items::activation::{activate, purchase};
use brain_heist::items::find_item;
use brain_heist::{Agent, Batch, TriviaSession};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_agent() -> Agent {
    Agent::new("Cipher", Batch::new("8A"), 0)
}

// =============================================================================
// Streaks and Penalties
// =============================================================================

#[test]
fn test_alternating_answers_keep_streak_flat() {
    let mut session = TriviaSession::new("Maths");
    let mut agent = make_agent();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..3 {
        let correct = session.answer(&mut agent, true, 0, &mut rng);
        // Streak is always 1 after a reset, so the base reward repeats.
        assert_eq!(correct.rewards.xp_gained, 60);
        let wrong = session.answer(&mut agent, false, 0, &mut rng);
        assert_eq!(wrong.rewards.creds_delta, -5);
    }
    assert_eq!(agent.streak, 0);
}

#[test]
fn test_repeated_misses_escalate_the_penalty() {
    let mut session = TriviaSession::new("Maths");
    let mut agent = make_agent();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut deltas = Vec::new();
    for _ in 0..4 {
        deltas.push(session.answer(&mut agent, false, 0, &mut rng).rewards.creds_delta);
    }
    assert_eq!(deltas, [-5, -7, -9, -11]);
    assert_eq!(agent.creds, STARTING_CREDS - 32);
}

#[test]
fn test_penalty_never_drives_creds_negative() {
    let mut session = TriviaSession::new("Maths");
    let mut agent = make_agent();
    agent.creds = 8;
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..5 {
        session.answer(&mut agent, false, 0, &mut rng);
    }
    assert_eq!(agent.creds, 0);
}

// =============================================================================
// Level Pacing
// =============================================================================

#[test]
fn test_perfect_run_levels_within_two_answers() {
    let mut session = TriviaSession::new("Maths");
    let mut agent = make_agent();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // 60 + 70 XP crosses the level-1 threshold of 100.
    let first = session.answer(&mut agent, true, 0, &mut rng);
    assert!(!first.rewards.leveled_up);
    let second = session.answer(&mut agent, true, 0, &mut rng);
    assert!(second.rewards.leveled_up);
    assert_eq!(agent.level, 2);
}

#[test]
fn test_level_never_skips_even_on_boosted_bonus() {
    let mut session = TriviaSession::new("Maths");
    let mut agent = make_agent();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // Sit just under the level-1 threshold with a 4x answer incoming.
    agent.xp = xp_for_next_level(1) - 1;
    agent.active_effects.booster_expiry = Some(i64::MAX);
    for _ in 0..BONUS_ROUND_INTERVAL - 1 {
        session.answer(&mut agent, false, 0, &mut rng);
    }
    let bonus = session.answer(&mut agent, true, 0, &mut rng);

    assert_eq!(bonus.rewards.multiplier, 4);
    assert!(bonus.rewards.leveled_up);
    assert_eq!(agent.level, 2);
}

// =============================================================================
// Booster Purchase to Payoff
// =============================================================================

#[test]
fn test_booster_bought_in_the_shop_doubles_the_next_answer() {
    let mut session = TriviaSession::new("Science");
    let mut agent = make_agent();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let booster = find_item("booster-1").unwrap();

    purchase(&mut agent, booster).unwrap();
    assert_eq!(agent.creds, STARTING_CREDS - booster.price);
    activate(&mut agent, booster, 1_000, &mut rng).unwrap();

    let inside = session.answer(&mut agent, true, 2_000, &mut rng);
    assert_eq!(inside.rewards.multiplier, 2);
    assert_eq!(inside.rewards.xp_gained, 120);

    // Past the expiry the window is over.
    let after = session.answer(&mut agent, true, 1_000 + XP_BOOSTER_DURATION_MS, &mut rng);
    assert_eq!(after.rewards.multiplier, 1);
}

// =============================================================================
// Bonus Rounds
// =============================================================================

#[test]
fn test_bonus_cadence_survives_misses() {
    let mut session = TriviaSession::new("Maths");
    let mut agent = make_agent();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // The cadence counts questions asked, not questions answered correctly.
    for n in 1..=(BONUS_ROUND_INTERVAL * 3) {
        let expected_bonus = n % BONUS_ROUND_INTERVAL == 0;
        let summary = session.answer(&mut agent, n % 3 == 0, 0, &mut rng);
        assert_eq!(summary.bonus_round, expected_bonus, "question {}", n);
    }
}

#[test]
fn test_bonus_gift_lands_in_the_inventory() {
    let mut session = TriviaSession::new("Maths");
    let mut agent = make_agent();
    agent.inventory.clear();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..BONUS_ROUND_INTERVAL {
        session.answer(&mut agent, true, 0, &mut rng);
    }
    let gifts: u32 = agent.inventory.values().sum();
    assert_eq!(gifts, 1);
}

#[test]
fn test_session_summary_counts_everything() {
    let mut session = TriviaSession::new("Geography");
    let mut agent = make_agent();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let pattern = [true, true, false, true, true, true, false];
    for correct in pattern {
        session.answer(&mut agent, correct, 0, &mut rng);
    }

    let summary = session.summary();
    assert_eq!(summary.questions_answered, 7);
    assert_eq!(summary.correct_answers, 5);
    assert_eq!(summary.best_streak, 3);
}
