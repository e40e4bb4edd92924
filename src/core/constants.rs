// Experience and progression constants
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;
pub const XP_PER_CORRECT_BASE: u64 = 50;
pub const XP_PER_STREAK_STEP: u64 = 10;

// Cred economy constants
pub const CREDS_PER_CORRECT_BASE: u64 = 10;
pub const CREDS_PER_STREAK_STEP: u64 = 12;
pub const CREDS_PENALTY_BASE: u64 = 5;
pub const CREDS_PENALTY_STEP: u64 = 2;

// Hack resolution constants
//
// The success-chance sensitivity and the failure penalty each had two
// competing drafts in the original balance sheet; these are the canonical
// values (see DESIGN.md).
pub const HACK_STAMINA_COST: u32 = 10;
pub const HACK_SKILL_SENSITIVITY: f64 = 0.05;
pub const HACK_CHANCE_FLOOR: f64 = 0.1;
pub const HACK_CHANCE_CEIL: f64 = 0.9;
pub const HACK_STEAL_FRACTION_MIN: f64 = 0.10;
pub const HACK_STEAL_FRACTION_MAX: f64 = 0.25;
pub const HACK_FAIL_FORFEIT_FRACTION: f64 = 0.05;
pub const HACK_COOLDOWN_MS: i64 = 60 * 60 * 1000;

// Stamina regeneration
pub const STAMINA_REGEN_INTERVAL_MS: i64 = 5_000;
pub const STAMINA_REGEN_PER_TICK: u32 = 1;

// Active effect durations
pub const XP_BOOSTER_DURATION_MS: i64 = 10 * 60 * 1000;
pub const REWARD_BOOST_MULTIPLIER: u64 = 2;

// Trivia sessions
pub const BONUS_ROUND_INTERVAL: u32 = 5;

// Live feed
pub const LIVE_FEED_CAP: usize = 50;

// Heartbeat / presence
pub const HEARTBEAT_INTERVAL_MS: i64 = 30_000;
pub const ONLINE_WINDOW_MS: i64 = 2 * 60 * 1000;

// New agent defaults
pub const STARTING_CREDS: u64 = 500;
pub const STARTING_HACKING_SKILL: u32 = 10;
pub const STARTING_SECURITY_LEVEL: u32 = 10;
pub const STARTING_STAMINA: u32 = 50;

// Classroom batches
pub const AVAILABLE_BATCHES: [&str; 3] = ["8A", "8B", "8C"];

// Snapshot file format
pub const SNAPSHOT_VERSION_MAGIC: u64 = 0x4252_4849_5354_3100; // "BRHIST1\0" in hex
