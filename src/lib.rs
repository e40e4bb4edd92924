//! Brain Heist - Classroom Trivia Game Logic Library
//!
//! Agents answer multiple-choice questions to earn creds and XP, spend
//! creds on items in the shop, and hack same-batch rivals for a cut of
//! their balance. This crate holds the whole game model: reward math,
//! hack resolution, item effects, roster and login, live feed,
//! leaderboard aggregation, persistence and question sourcing. No
//! presentation is attached, so any front end (or the bundled
//! simulator) can drive it.

pub mod agent;
pub mod core;
pub mod events;
pub mod items;
pub mod messages;
pub mod projector;
pub mod questions;
pub mod session;
pub mod simulator;
pub mod store;
pub mod sync;

pub use agent::roster::{LoginOutcome, Roster, RosterError};

/// Current wall-clock time in epoch milliseconds, the unit every
/// timestamp in the game model uses. Game logic takes `now_ms` as a
/// parameter; front ends feed it from here.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub use agent::{Agent, AgentId, Batch};
pub use core::hack::{HackOutcome, HackReport, HackResolution};
pub use core::rewards::AnswerRewards;
pub use events::{EventKind, LiveEvent, LiveFeed};
pub use session::TriviaSession;
