//! Per-sitting trivia session state.
//!
//! Tracks the two session counters the reward calculator consumes (the
//! correct-answer streak and the incorrect-answer penalty level, each reset
//! by a contrary outcome) and flags every Nth question as a bonus round
//! with doubled rewards and a surprise-box gift on success.

use rand::Rng;

use crate::agent::Agent;
use crate::core::constants::BONUS_ROUND_INTERVAL;
use crate::core::rewards::{apply_answer, AnswerRewards};
use crate::items::{find_item, ItemSpec};

/// Item ids a bonus-round surprise box can contain.
const SURPRISE_GIFTS: [&str; 3] = ["shield-1", "booster-1", "cosmetic-1"];

/// Outcome of one answered question, for the result display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerSummary {
    pub rewards: AnswerRewards,
    pub bonus_round: bool,
    /// Surprise-box gift granted for a correct bonus-round answer.
    pub gift: Option<&'static ItemSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub subject: String,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub best_streak: u32,
}

#[derive(Debug, Clone)]
pub struct TriviaSession {
    pub subject: String,
    /// Consecutive correct answers this session; reset by any incorrect.
    pub session_streak: u32,
    /// Consecutive incorrect answers; reset by any correct.
    pub penalty_level: u32,
    pub questions_answered: u32,
    pub correct_answers: u32,
    best_streak: u32,
}

impl TriviaSession {
    pub fn new(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
            session_streak: 0,
            penalty_level: 0,
            questions_answered: 0,
            correct_answers: 0,
            best_streak: 0,
        }
    }

    /// True when the next answer counts as a bonus round.
    pub fn bonus_round_next(&self) -> bool {
        (self.questions_answered + 1) % BONUS_ROUND_INTERVAL == 0
    }

    /// Records one answer: advances the session counters, applies the
    /// economic outcome to the agent, and rolls the surprise box on a
    /// correct bonus-round answer.
    pub fn answer(
        &mut self,
        agent: &mut Agent,
        correct: bool,
        now_ms: i64,
        rng: &mut impl Rng,
    ) -> AnswerSummary {
        let bonus_round = self.bonus_round_next();
        self.questions_answered += 1;

        if correct {
            self.session_streak += 1;
            self.penalty_level = 0;
            self.correct_answers += 1;
            self.best_streak = self.best_streak.max(self.session_streak);
        } else {
            self.penalty_level += 1;
            self.session_streak = 0;
        }

        let rewards = apply_answer(
            agent,
            correct,
            self.session_streak,
            self.penalty_level,
            bonus_round,
            now_ms,
        );

        let gift = if correct && bonus_round {
            let gift_id = SURPRISE_GIFTS[rng.gen_range(0..SURPRISE_GIFTS.len())];
            agent.add_item(gift_id);
            find_item(gift_id)
        } else {
            None
        };

        AnswerSummary {
            rewards,
            bonus_round,
            gift,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            subject: self.subject.clone(),
            questions_answered: self.questions_answered,
            correct_answers: self.correct_answers,
            best_streak: self.best_streak,
        }
    }
}
