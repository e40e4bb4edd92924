//! Hack resolution: one attacker-vs-defender action between two agents.
//!
//! Single-shot state machine with no suspension: precondition check,
//! cooldown check, stamina debit, shield check, probability roll, cred
//! transfer. Every branch is deterministic given its random draw.

use rand::Rng;

use crate::agent::Agent;
use crate::core::constants::*;
use crate::events::EventKind;
use crate::messages;

/// Why a hack attempt was rejected before any resources were spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    SelfTarget,
    DifferentBatch,
    InsufficientStamina,
}

/// Closed set of hack outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HackOutcome {
    /// Precondition violation. No state changed, no event logged.
    Blocked(BlockReason),
    /// Defender's lockdown window is still running. No resources consumed,
    /// surfaced to the attacker only.
    Cooldown,
    /// Defender's shield absorbed the attempt and was consumed. No roll,
    /// no creds moved.
    Shielded,
    Success { creds_stolen: u64 },
    Failure { creds_lost: u64 },
}

/// One-shot result record driving the attacker's result display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HackReport {
    pub target_name: String,
    pub success: bool,
    pub message: String,
    pub shield_used: bool,
}

/// Full resolution: typed outcome, display report, and the feed event to
/// broadcast (None for the private cooldown/blocked cases).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HackResolution {
    pub outcome: HackOutcome,
    pub report: HackReport,
    pub feed_event: Option<(EventKind, String)>,
}

/// Success chance for the given effective skill and security values,
/// clamped to [0.1, 0.9] so no matchup is ever certain.
pub fn success_chance(hacking_skill: u32, security_level: u32) -> f64 {
    let skill_difference = hacking_skill as f64 - security_level as f64;
    (0.5 + skill_difference * HACK_SKILL_SENSITIVITY).clamp(HACK_CHANCE_FLOOR, HACK_CHANCE_CEIL)
}

/// Resolves one hack attempt, mutating both agents in place.
///
/// Stage order matters: the cooldown check happens before the stamina
/// debit, so a locked-down target costs the attacker nothing; the shield
/// check happens after it, so a shielded target still burns the attempt.
pub fn resolve_hack(
    attacker: &mut Agent,
    defender: &mut Agent,
    now_ms: i64,
    rng: &mut impl Rng,
) -> HackResolution {
    if let Some(reason) = check_preconditions(attacker, defender) {
        return blocked(reason, defender);
    }

    if defender.on_cooldown(now_ms) {
        let message = format!(
            "HACK FAILED: {}'s systems are under lockdown protocol. Cooldown active.",
            defender.name
        );
        return HackResolution {
            outcome: HackOutcome::Cooldown,
            report: HackReport {
                target_name: defender.name.clone(),
                success: false,
                message,
                shield_used: false,
            },
            feed_event: None,
        };
    }

    // Preconditions passed: the attempt is real and the cost is paid
    // regardless of what happens next.
    attacker.stamina.spend(HACK_STAMINA_COST);
    attacker.touch(now_ms);

    if defender.active_effects.shielded {
        defender.active_effects.shielded = false;
        let message = format!(
            "🛡️ HACK FAILED: {}'s intrusion was blocked by {}'s Firewall Shield. The shield was consumed.",
            attacker.name, defender.name
        );
        return HackResolution {
            outcome: HackOutcome::Shielded,
            report: HackReport {
                target_name: defender.name.clone(),
                success: false,
                message: message.clone(),
                shield_used: true,
            },
            feed_event: Some((EventKind::HackShielded, message)),
        };
    }

    let chance = success_chance(attacker.hacking_skill, defender.security_level);
    if rng.gen::<f64>() < chance {
        let fraction = rng.gen_range(HACK_STEAL_FRACTION_MIN..HACK_STEAL_FRACTION_MAX);
        let creds_stolen = ((defender.creds as f64) * fraction).floor() as u64;
        let creds_stolen = creds_stolen.min(defender.creds);
        defender.creds -= creds_stolen;
        attacker.creds += creds_stolen;
        defender.last_hacked = Some(now_ms);

        let feed_message = messages::pick(
            &messages::HACK_SUCCESS_MESSAGES,
            &hack_params(attacker, defender, creds_stolen),
            rng,
        );
        HackResolution {
            outcome: HackOutcome::Success { creds_stolen },
            report: HackReport {
                target_name: defender.name.clone(),
                success: true,
                message: format!(
                    "HACK SUCCESSFUL! You breached {}'s network and plundered {} creds!",
                    defender.name, creds_stolen
                ),
                shield_used: false,
            },
            feed_event: Some((EventKind::HackSuccess, feed_message)),
        }
    } else {
        let creds_lost = ((attacker.creds as f64) * HACK_FAIL_FORFEIT_FRACTION).floor() as u64;
        let creds_lost = creds_lost.min(attacker.creds);
        attacker.creds -= creds_lost;
        defender.creds += creds_lost;

        let feed_message = messages::pick(
            &messages::HACK_FAIL_MESSAGES,
            &hack_params(attacker, defender, creds_lost),
            rng,
        );
        HackResolution {
            outcome: HackOutcome::Failure { creds_lost },
            report: HackReport {
                target_name: defender.name.clone(),
                success: false,
                message: format!(
                    "HACK FAILED! Your attack backfired against {}, costing you {} creds.",
                    defender.name, creds_lost
                ),
                shield_used: false,
            },
            feed_event: Some((EventKind::HackFail, feed_message)),
        }
    }
}

fn check_preconditions(attacker: &Agent, defender: &Agent) -> Option<BlockReason> {
    if attacker.id == defender.id {
        Some(BlockReason::SelfTarget)
    } else if attacker.batch != defender.batch {
        Some(BlockReason::DifferentBatch)
    } else if attacker.stamina.current < HACK_STAMINA_COST {
        Some(BlockReason::InsufficientStamina)
    } else {
        None
    }
}

fn blocked(reason: BlockReason, defender: &Agent) -> HackResolution {
    let message = match reason {
        BlockReason::SelfTarget => "HACK ABORTED: You cannot target yourself.".to_string(),
        BlockReason::DifferentBatch => format!(
            "HACK ABORTED: {} is outside your batch's network.",
            defender.name
        ),
        BlockReason::InsufficientStamina => format!(
            "HACK ABORTED: Not enough stamina (requires {}).",
            HACK_STAMINA_COST
        ),
    };
    HackResolution {
        outcome: HackOutcome::Blocked(reason),
        report: HackReport {
            target_name: defender.name.clone(),
            success: false,
            message,
            shield_used: false,
        },
        feed_event: None,
    }
}

fn hack_params(attacker: &Agent, defender: &Agent, creds: u64) -> [(&'static str, String); 3] {
    [
        ("hacker", attacker.name.clone()),
        ("target", defender.name.clone()),
        ("creds", creds.to_string()),
    ]
}
