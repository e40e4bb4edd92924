//! Shop purchases and item activation.
//!
//! Both operations are all-or-nothing: a rejected purchase debits nothing
//! and a rejected activation consumes nothing.

use std::fmt;

use rand::Rng;

use crate::agent::Agent;
use crate::core::constants::XP_BOOSTER_DURATION_MS;
use crate::events::EventKind;
use crate::items::{ItemKind, ItemSpec};
use crate::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    InsufficientCreds { price: u64, balance: u64 },
    LevelRequired(u32),
    /// Non-upgrade items are single-copy: one at a time in the inventory.
    AlreadyOwned,
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseError::InsufficientCreds { price, balance } => {
                write!(f, "insufficient funds: {} creds needed, {} held", price, balance)
            }
            PurchaseError::LevelRequired(level) => write!(f, "requires level {}", level),
            PurchaseError::AlreadyOwned => write!(f, "item already in inventory"),
        }
    }
}

impl std::error::Error for PurchaseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationError {
    NotInInventory,
    /// A second shield while one is active would silently waste it.
    AlreadyShielded,
    /// Cosmetic and hack-kind items have no activatable effect.
    NoActivatableEffect,
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::NotInInventory => write!(f, "item not in inventory"),
            ActivationError::AlreadyShielded => write!(f, "a shield is already active"),
            ActivationError::NoActivatableEffect => write!(f, "item has no activatable effect"),
        }
    }
}

impl std::error::Error for ActivationError {}

/// What an activation did, plus the feed event to broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationOutcome {
    pub item_id: String,
    pub feed_event: (EventKind, String),
}

/// Buys one unit of `item`, debiting its price.
pub fn purchase(agent: &mut Agent, item: &ItemSpec) -> Result<(), PurchaseError> {
    if let Some(required) = item.level_requirement {
        if agent.level < required {
            return Err(PurchaseError::LevelRequired(required));
        }
    }
    if agent.creds < item.price {
        return Err(PurchaseError::InsufficientCreds {
            price: item.price,
            balance: agent.creds,
        });
    }
    if item.kind != ItemKind::Upgrade && agent.item_count(item.id) > 0 {
        return Err(PurchaseError::AlreadyOwned);
    }

    agent.creds -= item.price;
    agent.add_item(item.id);
    Ok(())
}

/// Consumes one unit of `item` from the inventory and applies its effect.
///
/// Shields arm the one-shot block flag; upgrades apply permanent stat
/// deltas (raising max stamina also refills the pool by the same amount);
/// boosters start the 2x reward window.
pub fn activate(
    agent: &mut Agent,
    item: &ItemSpec,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Result<ActivationOutcome, ActivationError> {
    if agent.item_count(item.id) == 0 {
        return Err(ActivationError::NotInInventory);
    }

    match item.kind {
        ItemKind::Shield => {
            if agent.active_effects.shielded {
                return Err(ActivationError::AlreadyShielded);
            }
            agent.active_effects.shielded = true;
        }
        ItemKind::Upgrade => {
            agent.hacking_skill += item.effects.hacking_skill;
            agent.security_level += item.effects.security_level;
            if item.effects.max_stamina > 0 {
                agent.stamina.raise_max(item.effects.max_stamina);
            }
        }
        ItemKind::Booster => {
            agent.active_effects.booster_expiry = Some(now_ms + XP_BOOSTER_DURATION_MS);
        }
        ItemKind::Cosmetic | ItemKind::Hack => {
            return Err(ActivationError::NoActivatableEffect);
        }
    }

    agent.consume_item(item.id);
    agent.touch(now_ms);

    let message = messages::pick(
        &messages::ITEM_ACTIVATION_MESSAGES,
        &[
            ("user", agent.name.clone()),
            ("item", item.name.to_string()),
        ],
        rng,
    );
    Ok(ActivationOutcome {
        item_id: item.id.to_string(),
        feed_event: (EventKind::ItemActivation, message),
    })
}
