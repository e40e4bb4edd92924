//! Agent records and their intrinsic state transitions.
//!
//! An [`Agent`] is one player's persistent game record: identity, classroom
//! batch, progression, cred balance, combat attributes, stamina pool,
//! inventory and transient status effects. Cross-agent operations (hacking,
//! ranking, login) live in [`roster`].

pub mod roster;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::constants::*;

pub type AgentId = String;

const AVATAR_API: &str = "https://api.dicebear.com/7.x/pixel-art/svg?seed=";
const NEW_AGENT_BIO: &str = "A new agent has entered the system...";

/// Item ids granted to every freshly created agent.
pub const STARTER_KIT: [&str; 3] = ["upgrade-hack-1", "upgrade-sec-1", "upgrade-stam-1"];

/// Classroom cohort grouping. Hacking is restricted to agents in the same batch.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch(String);

impl Batch {
    /// Normalizes to trimmed uppercase so "8a " and "8A" compare equal.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Regenerating resource pool gating hack attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamina {
    pub current: u32,
    pub max: u32,
}

impl Stamina {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Debits `amount` if available. Returns false (and changes nothing)
    /// when the pool is too low.
    pub fn spend(&mut self, amount: u32) -> bool {
        if self.current < amount {
            return false;
        }
        self.current -= amount;
        true
    }

    /// One regeneration tick, capped at max.
    pub fn regen_tick(&mut self) {
        self.current = (self.current + STAMINA_REGEN_PER_TICK).min(self.max);
    }

    /// Permanent max increase. The current pool is refilled by the same
    /// amount, matching the Neuro-Link Capacitor behavior.
    pub fn raise_max(&mut self, delta: u32) {
        self.max += delta;
        self.current = (self.current + delta).min(self.max);
    }
}

/// Transient status effects applied by items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    /// One-time-use shield; consumed by the next incoming hack attempt.
    pub shielded: bool,
    /// Epoch-millis expiry of the 2x reward booster (None when inactive).
    pub booster_expiry: Option<i64>,
}

impl ActiveEffects {
    pub fn booster_active(&self, now_ms: i64) -> bool {
        self.booster_expiry.is_some_and(|expiry| now_ms < expiry)
    }
}

impl Default for ActiveEffects {
    fn default() -> Self {
        Self {
            shielded: false,
            booster_expiry: None,
        }
    }
}

/// Derives the stable agent id from a display name.
pub fn agent_id_for(name: &str) -> AgentId {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// One player's persistent game record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub batch: Batch,
    pub xp: u64,
    pub level: u32,
    pub creds: u64,
    /// Overall correct-answer streak, distinct from the per-session streak.
    pub streak: u32,
    pub hacking_skill: u32,
    pub security_level: u32,
    pub stamina: Stamina,
    /// Item id -> quantity. Quantities are always positive; a quantity
    /// reaching zero removes the key.
    #[serde(default)]
    pub inventory: BTreeMap<String, u32>,
    #[serde(default)]
    pub active_effects: ActiveEffects,
    /// Set when this agent was last successfully hacked; starts the cooldown.
    #[serde(default)]
    pub last_hacked: Option<i64>,
    pub last_active: i64,
}

impl Agent {
    /// Creates a new agent with starting stats and the starter kit.
    pub fn new(name: &str, batch: Batch, now_ms: i64) -> Self {
        let name = name.trim();
        let mut inventory = BTreeMap::new();
        for item_id in STARTER_KIT {
            inventory.insert(item_id.to_string(), 1);
        }

        Self {
            id: agent_id_for(name),
            name: name.to_string(),
            avatar: format!("{}{}", AVATAR_API, agent_id_for(name)),
            bio: NEW_AGENT_BIO.to_string(),
            batch,
            xp: 0,
            level: 1,
            creds: STARTING_CREDS,
            streak: 0,
            hacking_skill: STARTING_HACKING_SKILL,
            security_level: STARTING_SECURITY_LEVEL,
            stamina: Stamina::full(STARTING_STAMINA),
            inventory,
            active_effects: ActiveEffects::default(),
            last_hacked: None,
            last_active: now_ms,
        }
    }

    /// Activity heartbeat.
    pub fn touch(&mut self, now_ms: i64) {
        self.last_active = now_ms;
    }

    pub fn is_online(&self, now_ms: i64) -> bool {
        now_ms - self.last_active <= ONLINE_WINDOW_MS
    }

    /// True while the post-hack lockdown window is still running.
    pub fn on_cooldown(&self, now_ms: i64) -> bool {
        self.last_hacked
            .is_some_and(|hacked_at| now_ms - hacked_at < HACK_COOLDOWN_MS)
    }

    pub fn item_count(&self, item_id: &str) -> u32 {
        self.inventory.get(item_id).copied().unwrap_or(0)
    }

    pub fn add_item(&mut self, item_id: &str) {
        *self.inventory.entry(item_id.to_string()).or_insert(0) += 1;
    }

    /// Removes one unit from the inventory. Returns false if the item is
    /// not present; the zero-quantity key is dropped.
    pub fn consume_item(&mut self, item_id: &str) -> bool {
        match self.inventory.get_mut(item_id) {
            Some(quantity) if *quantity > 1 => {
                *quantity -= 1;
                true
            }
            Some(_) => {
                self.inventory.remove(item_id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_agent_defaults() {
        let agent = Agent::new("  Cipher ", Batch::new("8a"), 1000);

        assert_eq!(agent.id, "cipher");
        assert_eq!(agent.name, "Cipher");
        assert_eq!(agent.batch, Batch::new("8A"));
        assert_eq!(agent.level, 1);
        assert_eq!(agent.xp, 0);
        assert_eq!(agent.creds, STARTING_CREDS);
        assert_eq!(agent.stamina, Stamina::full(STARTING_STAMINA));
        assert!(!agent.active_effects.shielded);
        for item_id in STARTER_KIT {
            assert_eq!(agent.item_count(item_id), 1);
        }
    }

    #[test]
    fn test_agent_id_strips_whitespace() {
        assert_eq!(agent_id_for("Neon Runner"), "neonrunner");
        assert_eq!(agent_id_for("ZERO"), "zero");
    }

    #[test]
    fn test_stamina_spend_and_regen() {
        let mut stamina = Stamina::full(50);
        assert!(stamina.spend(10));
        assert_eq!(stamina.current, 40);

        stamina.current = 2;
        assert!(!stamina.spend(10));
        assert_eq!(stamina.current, 2);

        stamina.regen_tick();
        assert_eq!(stamina.current, 3);

        stamina.current = 50;
        stamina.regen_tick();
        assert_eq!(stamina.current, 50); // Capped at max
    }

    #[test]
    fn test_stamina_raise_max_refills() {
        let mut stamina = Stamina { current: 30, max: 50 };
        stamina.raise_max(10);
        assert_eq!(stamina.max, 60);
        assert_eq!(stamina.current, 40);
    }

    #[test]
    fn test_booster_expiry() {
        let mut effects = ActiveEffects::default();
        assert!(!effects.booster_active(1000));

        effects.booster_expiry = Some(2000);
        assert!(effects.booster_active(1999));
        assert!(!effects.booster_active(2000));
    }

    #[test]
    fn test_cooldown_window() {
        let mut agent = Agent::new("Glitch", Batch::new("8B"), 0);
        assert!(!agent.on_cooldown(0));

        agent.last_hacked = Some(0);
        assert!(agent.on_cooldown(HACK_COOLDOWN_MS - 1));
        assert!(!agent.on_cooldown(HACK_COOLDOWN_MS));
    }

    #[test]
    fn test_inventory_consume_drops_zero_key() {
        let mut agent = Agent::new("Zero", Batch::new("8C"), 0);
        agent.add_item("shield-1");
        agent.add_item("shield-1");

        assert!(agent.consume_item("shield-1"));
        assert_eq!(agent.item_count("shield-1"), 1);
        assert!(agent.consume_item("shield-1"));
        assert_eq!(agent.item_count("shield-1"), 0);
        assert!(!agent.inventory.contains_key("shield-1"));
        assert!(!agent.consume_item("shield-1"));
    }
}
