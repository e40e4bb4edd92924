//! Fire-and-forget stats sync with a hosted backend.
//!
//! The backend is an opaque HTTP collaborator: one row per agent, upserted
//! whole. Pushes never block game actions; failures are logged and the
//! local store stays authoritative. Leaderboard reads are eventually
//! consistent.

use std::error::Error;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::agent::Agent;

const SYNC_URL_ENV: &str = "BRAIN_HEIST_SYNC_URL";
const SYNC_KEY_ENV: &str = "BRAIN_HEIST_SYNC_KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One agent's stats row as the backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRow {
    pub username: String,
    pub batch: String,
    pub xp: u64,
    pub creds: u64,
    pub hacking: u32,
    pub security: u32,
    pub stamina_current: u32,
    pub stamina_max: u32,
    pub bio: String,
}

impl StatsRow {
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            username: agent.name.clone(),
            batch: agent.batch.to_string(),
            xp: agent.xp,
            creds: agent.creds,
            hacking: agent.hacking_skill,
            security: agent.security_level,
            stamina_current: agent.stamina.current,
            stamina_max: agent.stamina.max,
            bio: agent.bio.clone(),
        }
    }
}

pub struct SyncClient {
    base_url: String,
    api_key: Option<String>,
}

impl SyncClient {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    /// Builds a client from the environment. None when no endpoint is
    /// configured, in which case the game simply runs local-only.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(SYNC_URL_ENV).ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        let api_key = std::env::var(SYNC_KEY_ENV).ok();
        Some(Self::new(&base_url, api_key.as_deref()))
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let mut request = ureq::request(method, &format!("{}{}", self.base_url, path))
            .timeout(REQUEST_TIMEOUT);
        if let Some(key) = &self.api_key {
            request = request.set("Authorization", &format!("Bearer {}", key));
        }
        request
    }

    /// Pushes one agent's stats row. Fire-and-forget: errors are logged,
    /// never propagated.
    pub fn push_stats(&self, agent: &Agent) {
        let row = StatsRow::from_agent(agent);
        if let Err(error) = self.try_push(&row) {
            log::warn!("stats push for '{}' failed: {}", row.username, error);
        }
    }

    fn try_push(&self, row: &StatsRow) -> Result<(), Box<dyn Error>> {
        self.request("POST", "/stats")
            .send_json(serde_json::to_value(row)?)?;
        Ok(())
    }

    /// Fetches the ranked leaderboard, optionally narrowed to one batch.
    pub fn fetch_leaderboard(
        &self,
        batch: Option<&str>,
        limit: usize,
    ) -> Result<Vec<StatsRow>, Box<dyn Error>> {
        let path = match batch {
            Some(batch) => format!("/leaderboard?batch={}&limit={}", batch, limit),
            None => format!("/leaderboard?limit={}", limit),
        };
        let rows: Vec<StatsRow> = self.request("GET", &path).call()?.into_json()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Batch;

    #[test]
    fn test_stats_row_mirrors_agent() {
        let mut agent = Agent::new("Cipher", Batch::new("8a"), 0);
        agent.xp = 1250;
        agent.creds = 640;
        agent.stamina.current = 35;

        let row = StatsRow::from_agent(&agent);
        assert_eq!(row.username, "Cipher");
        assert_eq!(row.batch, "8A");
        assert_eq!(row.xp, 1250);
        assert_eq!(row.creds, 640);
        assert_eq!(row.stamina_current, 35);
        assert_eq!(row.stamina_max, 50);
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = SyncClient::new("https://example.test/api/", None);
        assert_eq!(client.base_url, "https://example.test/api");
    }
}
