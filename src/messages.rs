//! Message template banks for the live feed.
//!
//! Templates use `{name}` placeholders interpolated at event time, so the
//! same bank serves every attacker/defender pairing.

use rand::Rng;

pub const HACK_SUCCESS_MESSAGES: [&str; 5] = [
    "💸 {hacker} breached {target}'s defenses and siphoned {creds} creds. Easy money.",
    "💥 {hacker} just pulled a fast one on {target}, walking away with {creds} creds.",
    "😎 Ghosted. {hacker} slipped past {target}'s security, securing a payload of {creds} creds.",
    "🚨 INTRUSION ALERT: {hacker} successfully exploited {target}'s network for {creds} creds.",
    "😂 {hacker} made {target}'s firewall look like a joke. Loot: {creds} creds.",
];

pub const HACK_FAIL_MESSAGES: [&str; 5] = [
    "🛡️ DENIED. {hacker}'s attack on {target} backfired spectacularly, costing them {creds} creds.",
    "🤦 Ouch. {hacker} tripped the wire on {target}'s system and lost {creds} creds for their trouble.",
    "🔥 REVERSED! {target}'s defenses were too strong, redirecting {hacker}'s attack and draining {creds} of their creds.",
    "🚫 ACCESS DENIED. {hacker} tried to hack {target}, but ended up funding their account with {creds} creds instead.",
    "🤡 A script kiddie move from {hacker}. {target} not only blocked the attack but gained {creds} creds.",
];

pub const ITEM_ACTIVATION_MESSAGES: [&str; 4] = [
    "⚙️ {user} integrated {item}. System capabilities enhanced.",
    "⚡️ Power up! {user} just activated a {item}.",
    "✅ {user} brought a new toy online: {item}.",
    "🚀 {user} engaged their {item}. Ready for action.",
];

/// Replaces every `{key}` placeholder with its value.
pub fn render(template: &str, params: &[(&str, String)]) -> String {
    let mut message = template.to_string();
    for (key, value) in params {
        message = message.replace(&format!("{{{}}}", key), value);
    }
    message
}

/// Picks a template from a bank and interpolates it.
pub fn pick(bank: &[&str], params: &[(&str, String)], rng: &mut impl Rng) -> String {
    let template = bank[rng.gen_range(0..bank.len())];
    render(template, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_all_placeholders() {
        let message = render(
            "{hacker} hit {target} twice: {hacker}!",
            &[
                ("hacker", "Cipher".to_string()),
                ("target", "Glitch".to_string()),
            ],
        );
        assert_eq!(message, "Cipher hit Glitch twice: Cipher!");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let message = render("{user} won {creds}", &[("user", "Zero".to_string())]);
        assert_eq!(message, "Zero won {creds}");
    }

    #[test]
    fn test_pick_always_interpolates() {
        let mut rng = rand::thread_rng();
        let params = [
            ("hacker", "Cipher".to_string()),
            ("target", "Glitch".to_string()),
            ("creds", "42".to_string()),
        ];
        for _ in 0..20 {
            let message = pick(&HACK_SUCCESS_MESSAGES, &params, &mut rng);
            assert!(!message.contains('{'));
        }
    }
}
