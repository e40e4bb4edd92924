use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::agent::roster::Roster;
use crate::agent::{AgentId, Batch};
use crate::core::constants::{AVAILABLE_BATCHES, STAMINA_REGEN_INTERVAL_MS};
use crate::core::hack::HackOutcome;
use crate::events::LiveFeed;
use crate::session::TriviaSession;
use crate::simulator::{SimConfig, SimReport};

const CODENAME_PREFIXES: [&str; 8] = [
    "Cipher", "Glitch", "Neon", "Zero", "Byte", "Echo", "Nova", "Pixel",
];

fn codename(index: usize) -> String {
    let prefix = CODENAME_PREFIXES[index % CODENAME_PREFIXES.len()];
    format!("{}{:02}", prefix, index)
}

/// Runs one synthetic classroom session.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut roster = Roster::new();
    let mut feed = LiveFeed::with_boot_banner(0);
    let mut agent_ids: Vec<AgentId> = Vec::with_capacity(config.num_agents);
    let mut sessions: Vec<TriviaSession> = Vec::with_capacity(config.num_agents);

    for index in 0..config.num_agents {
        let batch = Batch::new(AVAILABLE_BATCHES[index % AVAILABLE_BATCHES.len()]);
        let (id, _) = roster
            .login(&codename(index), batch, 0)
            .expect("fresh roster accepts every synthetic agent");
        agent_ids.push(id);
        sessions.push(TriviaSession::new("Maths"));
    }

    let mut report = SimReport {
        num_agents: config.num_agents,
        rounds: config.rounds,
        ..Default::default()
    };

    let mut now_ms = 0i64;
    for _ in 0..config.rounds {
        now_ms += STAMINA_REGEN_INTERVAL_MS;
        roster.regen_tick();

        // Trivia phase: everyone answers one question.
        for (index, agent_id) in agent_ids.iter().enumerate() {
            let correct = rng.gen::<f64>() < config.accuracy;
            let mut agent = roster
                .get(agent_id)
                .expect("synthetic agents are never removed")
                .clone();
            let summary = sessions[index].answer(&mut agent, correct, now_ms, &mut rng);
            roster.upsert(agent);

            report.questions_answered += 1;
            if correct {
                report.correct_answers += 1;
            }
            if summary.rewards.leveled_up {
                report.level_ups += 1;
            }
        }

        // Hack phase: a fraction of the class goes on the offensive.
        for attacker_id in &agent_ids {
            if rng.gen::<f64>() >= config.hack_rate {
                continue;
            }
            let attacker_batch = roster
                .get(attacker_id)
                .expect("synthetic agents are never removed")
                .batch
                .clone();
            let targets: Vec<AgentId> = roster
                .ranked_by_batch(&attacker_batch)
                .iter()
                .filter(|agent| &agent.id != attacker_id)
                .map(|agent| agent.id.clone())
                .collect();
            let Some(defender_id) = targets.choose(&mut rng) else {
                continue;
            };

            let resolution = roster
                .hack(attacker_id, defender_id, now_ms, &mut rng)
                .expect("both agents exist");
            report.hacks_attempted += 1;
            match resolution.outcome {
                HackOutcome::Success { .. } => report.hack_successes += 1,
                HackOutcome::Failure { .. } => report.hack_failures += 1,
                HackOutcome::Shielded => report.hack_shielded += 1,
                HackOutcome::Cooldown => report.hack_cooldown += 1,
                HackOutcome::Blocked(_) => report.hack_blocked += 1,
            }
            if let Some((kind, message)) = resolution.feed_event {
                feed.push(kind, message, now_ms);
            }
        }
    }

    let mut level_total = 0u64;
    let mut creds_total = 0u64;
    report.min_creds = u64::MAX;
    for agent in roster.iter() {
        level_total += agent.level as u64;
        creds_total += agent.creds;
        report.max_level = report.max_level.max(agent.level);
        report.min_creds = report.min_creds.min(agent.creds);
        report.max_creds = report.max_creds.max(agent.creds);
    }
    if roster.is_empty() {
        report.min_creds = 0;
    }
    report.avg_level = level_total as f64 / config.num_agents.max(1) as f64;
    report.avg_creds = creds_total as f64 / config.num_agents.max(1) as f64;
    report.total_creds = creds_total;
    report.feed_events = feed.len();

    report
}
