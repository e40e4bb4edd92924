//! In-memory agent roster with last-writer-wins update semantics.
//!
//! The roster is the single authority for cross-agent operations: login,
//! lookup, ranked listings and hack resolution. Updates follow the
//! read-copy-modify-write-back discipline: an operation works on clones of
//! the records it touches and writes whole records back, so concurrent
//! writers racing on the same agent resolve to the later write. That weak
//! consistency is the accepted policy for a casual classroom game.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;

use crate::agent::{agent_id_for, Agent, AgentId, Batch};
use crate::core::hack::{resolve_hack, HackResolution};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Referenced agent record is missing from the store. Surfaced to the
    /// caller rather than silently aborting the action.
    UnknownAgent(AgentId),
    /// The name is already registered under a different batch.
    BatchMismatch { name: String, batch: Batch },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::UnknownAgent(id) => write!(f, "no agent record for '{}'", id),
            RosterError::BatchMismatch { name, batch } => write!(
                f,
                "agent '{}' is already registered in batch {}",
                name, batch
            ),
        }
    }
}

impl std::error::Error for RosterError {}

/// How a login resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Resumed,
    Created,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    agents: BTreeMap<AgentId, Agent>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&Agent, RosterError> {
        self.agents
            .get(id)
            .ok_or_else(|| RosterError::UnknownAgent(id.to_string()))
    }

    /// Whole-record write-back. Last writer wins.
    pub fn upsert(&mut self, agent: Agent) {
        self.agents.insert(agent.id.clone(), agent);
    }

    pub fn remove(&mut self, id: &str) -> Option<Agent> {
        self.agents.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    /// Logs an agent in by display name.
    ///
    /// An existing name in the same batch resumes that record; the same
    /// name in a different batch is rejected; an unknown name creates a
    /// fresh agent with starting stats and the starter kit.
    pub fn login(
        &mut self,
        name: &str,
        batch: Batch,
        now_ms: i64,
    ) -> Result<(AgentId, LoginOutcome), RosterError> {
        let id = agent_id_for(name);
        if let Some(existing) = self.agents.get_mut(&id) {
            if existing.batch != batch {
                return Err(RosterError::BatchMismatch {
                    name: existing.name.clone(),
                    batch: existing.batch.clone(),
                });
            }
            existing.touch(now_ms);
            return Ok((id, LoginOutcome::Resumed));
        }

        let agent = Agent::new(name, batch, now_ms);
        let id = agent.id.clone();
        self.agents.insert(id.clone(), agent);
        Ok((id, LoginOutcome::Created))
    }

    /// Resolves a hack between two stored agents and writes both records
    /// back. Mirrors the store's read-copy-write-back discipline.
    pub fn hack(
        &mut self,
        attacker_id: &str,
        defender_id: &str,
        now_ms: i64,
        rng: &mut impl Rng,
    ) -> Result<HackResolution, RosterError> {
        let mut attacker = self.get(attacker_id)?.clone();
        let mut defender = self.get(defender_id)?.clone();

        let resolution = resolve_hack(&mut attacker, &mut defender, now_ms, rng);

        self.upsert(attacker);
        self.upsert(defender);
        Ok(resolution)
    }

    /// Agents in the given batch ranked by XP, highest first.
    pub fn ranked_by_batch(&self, batch: &Batch) -> Vec<&Agent> {
        let mut ranked: Vec<&Agent> = self
            .agents
            .values()
            .filter(|agent| &agent.batch == batch)
            .collect();
        ranked.sort_by(|a, b| b.xp.cmp(&a.xp).then_with(|| a.name.cmp(&b.name)));
        ranked
    }

    /// All agents ranked by XP, highest first.
    pub fn ranked(&self) -> Vec<&Agent> {
        let mut ranked: Vec<&Agent> = self.agents.values().collect();
        ranked.sort_by(|a, b| b.xp.cmp(&a.xp).then_with(|| a.name.cmp(&b.name)));
        ranked
    }

    /// One stamina regeneration tick for every agent.
    pub fn regen_tick(&mut self) {
        for agent in self.agents.values_mut() {
            agent.stamina.regen_tick();
        }
    }

    /// Activity heartbeat for one agent.
    pub fn heartbeat(&mut self, id: &str, now_ms: i64) -> Result<(), RosterError> {
        let agent = self
            .agents
            .get_mut(id)
            .ok_or_else(|| RosterError::UnknownAgent(id.to_string()))?;
        agent.touch(now_ms);
        Ok(())
    }

    /// Destructive reset: drops every agent record.
    pub fn reset(&mut self) {
        self.agents.clear();
    }
}
