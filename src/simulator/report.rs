use serde::Serialize;

/// Aggregated results of one simulation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimReport {
    pub num_agents: usize,
    pub rounds: u32,

    pub questions_answered: u64,
    pub correct_answers: u64,
    pub level_ups: u64,

    pub hacks_attempted: u64,
    pub hack_successes: u64,
    pub hack_failures: u64,
    pub hack_shielded: u64,
    pub hack_cooldown: u64,
    pub hack_blocked: u64,

    pub avg_level: f64,
    pub max_level: u32,
    pub avg_creds: f64,
    pub min_creds: u64,
    pub max_creds: u64,
    pub total_creds: u64,

    pub feed_events: usize,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("═══ Classroom Report ═══\n");
        out.push_str(&format!(
            "Agents: {}    Rounds: {}\n\n",
            self.num_agents, self.rounds
        ));
        out.push_str(&format!(
            "Trivia:  {} answered, {} correct ({:.1}%), {} level-ups\n",
            self.questions_answered,
            self.correct_answers,
            percentage(self.correct_answers, self.questions_answered),
            self.level_ups
        ));
        out.push_str(&format!(
            "Hacks:   {} attempted: {} success / {} fail / {} shielded / {} cooldown / {} blocked\n",
            self.hacks_attempted,
            self.hack_successes,
            self.hack_failures,
            self.hack_shielded,
            self.hack_cooldown,
            self.hack_blocked
        ));
        out.push_str(&format!(
            "Levels:  avg {:.1}, max {}\n",
            self.avg_level, self.max_level
        ));
        out.push_str(&format!(
            "Creds:   avg {:.0}, min {}, max {}, total {}\n",
            self.avg_creds, self.min_creds, self.max_creds, self.total_creds
        ));
        out.push_str(&format!("Feed:    {} events retained\n", self.feed_events));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report_renders_all_sections() {
        let report = SimReport {
            num_agents: 3,
            rounds: 10,
            questions_answered: 30,
            correct_answers: 21,
            ..Default::default()
        };
        let text = report.to_text();
        assert!(text.contains("Agents: 3"));
        assert!(text.contains("70.0%"));
        assert!(text.contains("Feed:"));
    }

    #[test]
    fn test_percentage_handles_zero_whole() {
        assert_eq!(percentage(5, 0), 0.0);
    }
}
