//! Integration test: shop catalog, purchases and activations.
//!
//! Walks the store flows end to end on a live agent: affordability from
//! starting funds, the single-copy rule, the starter kit, and the way
//! activated upgrades feed back into hack balance.

use brain_heist::agent::STARTER_KIT;
use brain_heist::core::constants::{STARTING_CREDS, STARTING_HACKING_SKILL};
use brain_heist::core::hack::success_chance;
use brain_heist::events::EventKind;
use brain_heist::items::activation::{activate, purchase, ActivationError, PurchaseError};
use brain_heist::items::{find_item, ItemKind, SHOP_ITEMS};
use brain_heist::{Agent, Batch};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_agent() -> Agent {
    Agent::new("Cipher", Batch::new("8A"), 0)
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_starting_funds_afford_any_single_item_but_not_the_catalog() {
    let total: u64 = SHOP_ITEMS.iter().map(|item| item.price).sum();
    for item in &SHOP_ITEMS {
        assert!(item.price <= STARTING_CREDS, "{} is unaffordable", item.id);
    }
    assert!(total > STARTING_CREDS);
}

#[test]
fn test_starter_kit_items_exist_in_the_catalog() {
    for item_id in STARTER_KIT {
        let item = find_item(item_id).expect("starter kit id is in the catalog");
        assert_eq!(item.kind, ItemKind::Upgrade);
    }
}

// =============================================================================
// Purchase Flow
// =============================================================================

#[test]
fn test_spending_spree_stops_at_zero() {
    let mut agent = make_agent();
    let shield = find_item("shield-1").unwrap();
    let spike = find_item("upgrade-hack-1").unwrap();

    purchase(&mut agent, shield).unwrap();
    // 500 - 200 leaves 300; the 400-cred upgrade is refused untouched.
    assert_eq!(
        purchase(&mut agent, spike),
        Err(PurchaseError::InsufficientCreds {
            price: 400,
            balance: STARTING_CREDS - 200,
        })
    );
    assert_eq!(agent.creds, STARTING_CREDS - 200);
    assert_eq!(agent.item_count("upgrade-hack-1"), 1); // Starter copy only
}

#[test]
fn test_single_copy_rule_applies_to_consumables_only() {
    let mut agent = make_agent();
    agent.creds = 10_000;
    let shield = find_item("shield-1").unwrap();
    let spike = find_item("upgrade-hack-1").unwrap();

    purchase(&mut agent, shield).unwrap();
    assert_eq!(purchase(&mut agent, shield), Err(PurchaseError::AlreadyOwned));

    // Upgrades stack freely (the starter kit already holds one).
    purchase(&mut agent, spike).unwrap();
    purchase(&mut agent, spike).unwrap();
    assert_eq!(agent.item_count("upgrade-hack-1"), 3);
}

#[test]
fn test_level_gated_item_unlocks_at_the_gate() {
    let mut agent = make_agent();
    agent.creds = 10_000;
    let capacitor = find_item("upgrade-stam-1").unwrap();

    assert_eq!(
        purchase(&mut agent, capacitor),
        Err(PurchaseError::LevelRequired(3))
    );
    agent.level = 3;
    purchase(&mut agent, capacitor).unwrap();
}

// =============================================================================
// Activation Feeds the Hack Economy
// =============================================================================

#[test]
fn test_starter_kit_activation_shifts_the_hack_odds() {
    let mut agent = make_agent();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let baseline = success_chance(agent.hacking_skill, STARTING_HACKING_SKILL);

    let outcome = activate(
        &mut agent,
        find_item("upgrade-hack-1").unwrap(),
        0,
        &mut rng,
    )
    .unwrap();
    assert_eq!(agent.hacking_skill, STARTING_HACKING_SKILL + 5);
    assert!(success_chance(agent.hacking_skill, STARTING_HACKING_SKILL) > baseline);
    assert_eq!(outcome.feed_event.0, EventKind::ItemActivation);

    // The starter copy is consumed; a second activation needs a purchase.
    assert_eq!(
        activate(
            &mut agent,
            find_item("upgrade-hack-1").unwrap(),
            0,
            &mut rng
        ),
        Err(ActivationError::NotInInventory)
    );
}

#[test]
fn test_capacitor_extends_the_stamina_budget() {
    let mut agent = make_agent();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let before = agent.stamina.max;

    activate(
        &mut agent,
        find_item("upgrade-stam-1").unwrap(),
        0,
        &mut rng,
    )
    .unwrap();
    assert_eq!(agent.stamina.max, before + 10);
    assert_eq!(agent.stamina.current, agent.stamina.max);
}

#[test]
fn test_activation_messages_are_fully_rendered() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for item_id in STARTER_KIT {
        let mut agent = make_agent();
        let outcome = activate(&mut agent, find_item(item_id).unwrap(), 0, &mut rng).unwrap();
        let message = outcome.feed_event.1;
        assert!(message.contains("Cipher"), "missing user in: {}", message);
        assert!(!message.contains('{'), "unrendered template: {}", message);
    }
}
