/// Simulation parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Agents in the synthetic classroom, spread round-robin over batches.
    pub num_agents: usize,
    /// Rounds to simulate. Each round is one answer per agent plus a
    /// chance to hack, with a stamina regen tick in between.
    pub rounds: u32,
    /// Chance an agent answers a question correctly.
    pub accuracy: f64,
    /// Chance an agent attempts a hack in a given round.
    pub hack_rate: f64,
    /// RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_agents: 12,
            rounds: 200,
            accuracy: 0.7,
            hack_rate: 0.25,
            seed: None,
        }
    }
}
