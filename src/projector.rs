//! Read-only aggregation for the projector and leaderboard views.
//!
//! Nothing here mutates game state: the projector is a glass pane over the
//! roster, plus the end-of-game standings summary.

use crate::agent::roster::Roster;
use crate::agent::{AgentId, Batch};

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub rank: usize,
    pub agent_id: AgentId,
    pub name: String,
    pub batch: Batch,
    pub level: u32,
    pub xp: u64,
    pub creds: u64,
    pub shielded: bool,
    pub online: bool,
}

/// Final standings shown when the heist is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeistSummary {
    pub standings: Vec<Standing>,
    pub finished_at: i64,
}

fn standing_for(rank: usize, agent: &crate::agent::Agent, now_ms: i64) -> Standing {
    Standing {
        rank,
        agent_id: agent.id.clone(),
        name: agent.name.clone(),
        batch: agent.batch.clone(),
        level: agent.level,
        xp: agent.xp,
        creds: agent.creds,
        shielded: agent.active_effects.shielded,
        online: agent.is_online(now_ms),
    }
}

/// Full leaderboard, ranked by XP. `batch` narrows to one cohort.
pub fn standings(roster: &Roster, batch: Option<&Batch>, now_ms: i64) -> Vec<Standing> {
    let ranked = match batch {
        Some(batch) => roster.ranked_by_batch(batch),
        None => roster.ranked(),
    };
    ranked
        .into_iter()
        .enumerate()
        .map(|(index, agent)| standing_for(index + 1, agent, now_ms))
        .collect()
}

/// Top three agents by XP, for the winners' podium.
pub fn winners(roster: &Roster, now_ms: i64) -> Vec<Standing> {
    standings(roster, None, now_ms).into_iter().take(3).collect()
}

/// Calls the heist: freezes the final standings.
pub fn finish_heist(roster: &Roster, now_ms: i64) -> HeistSummary {
    HeistSummary {
        standings: standings(roster, None, now_ms),
        finished_at: now_ms,
    }
}

/// Ordinal suffix for a rank: 1st, 2nd, 3rd, 4th, ... 11th-13th.
pub fn rank_suffix(rank: usize) -> &'static str {
    if (11..=13).contains(&(rank % 100)) {
        return "th";
    }
    match rank % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
