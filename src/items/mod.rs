//! Shop catalog and item effects.
//!
//! Catalog entries are immutable reference data: agents own quantities in
//! their inventory, never the entries themselves.

pub mod activation;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Booster,
    Shield,
    Cosmetic,
    Hack,
    Upgrade,
}

/// Permanent stat deltas applied by upgrade items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEffects {
    pub hacking_skill: u32,
    pub security_level: u32,
    pub max_stamina: u32,
}

/// Static catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u64,
    pub kind: ItemKind,
    pub effects: StatEffects,
    pub level_requirement: Option<u32>,
}

const NO_EFFECTS: StatEffects = StatEffects {
    hacking_skill: 0,
    security_level: 0,
    max_stamina: 0,
};

pub const SHOP_ITEMS: [ItemSpec; 6] = [
    ItemSpec {
        id: "shield-1",
        name: "Firewall Shield",
        description: "Blocks one incoming hack attempt outright. Consumed after use.",
        price: 200,
        kind: ItemKind::Shield,
        effects: NO_EFFECTS,
        level_requirement: None,
    },
    ItemSpec {
        id: "upgrade-hack-1",
        name: "Data Spike",
        description: "Permanent Upgrade: Increases Hacking Skill by 5.",
        price: 400,
        kind: ItemKind::Upgrade,
        effects: StatEffects {
            hacking_skill: 5,
            security_level: 0,
            max_stamina: 0,
        },
        level_requirement: None,
    },
    ItemSpec {
        id: "upgrade-sec-1",
        name: "Security Protocol",
        description: "Permanent Upgrade: Increases Security Level by 5.",
        price: 400,
        kind: ItemKind::Upgrade,
        effects: StatEffects {
            hacking_skill: 0,
            security_level: 5,
            max_stamina: 0,
        },
        level_requirement: None,
    },
    ItemSpec {
        id: "upgrade-stam-1",
        name: "Neuro-Link Capacitor",
        description: "Permanent Upgrade: Increases Max Stamina by 10.",
        price: 500,
        kind: ItemKind::Upgrade,
        effects: StatEffects {
            hacking_skill: 0,
            security_level: 0,
            max_stamina: 10,
        },
        level_requirement: Some(3),
    },
    ItemSpec {
        id: "booster-1",
        name: "XP Booster (2x)",
        description: "Doubles XP and cred gain for 10 minutes.",
        price: 350,
        kind: ItemKind::Booster,
        effects: NO_EFFECTS,
        level_requirement: None,
    },
    ItemSpec {
        id: "cosmetic-1",
        name: "Glitch Avatar Frame",
        description: "A cool animated frame for your avatar.",
        price: 500,
        kind: ItemKind::Cosmetic,
        effects: NO_EFFECTS,
        level_requirement: None,
    },
];

/// Looks up a catalog entry by id.
pub fn find_item(item_id: &str) -> Option<&'static ItemSpec> {
    SHOP_ITEMS.iter().find(|item| item.id == item_id)
}
