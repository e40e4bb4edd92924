//! Per-agent JSON files in the platform data directory.
//!
//! One file per agent keyed by agent id, scanned on load. This is the
//! explicit repository replacement for the original key-value scan: a
//! record that fails to parse is reported as corrupt and skipped instead
//! of poisoning the whole roster.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::agent::roster::Roster;
use crate::agent::Agent;

pub struct RosterStore {
    data_dir: PathBuf,
}

impl RosterStore {
    /// Opens the store at the platform data directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "brain-heist").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;
        Self::at_dir(project_dirs.data_dir())
    }

    /// Opens the store at an explicit directory (tests, projector exports).
    pub fn at_dir(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            data_dir: dir.to_path_buf(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn agent_path(&self, agent_id: &str) -> PathBuf {
        self.data_dir.join(format!("agent-{}.json", agent_id))
    }

    /// Writes one agent record, overwriting any previous version.
    pub fn save_agent(&self, agent: &Agent) -> io::Result<()> {
        let json = serde_json::to_string_pretty(agent)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.agent_path(&agent.id), json)
    }

    /// Writes every agent in the roster.
    pub fn save_roster(&self, roster: &Roster) -> io::Result<()> {
        for agent in roster.iter() {
            self.save_agent(agent)?;
        }
        Ok(())
    }

    pub fn load_agent(&self, agent_id: &str) -> io::Result<Agent> {
        let json = fs::read_to_string(self.agent_path(agent_id))?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Scans the directory and rebuilds the roster.
    ///
    /// Returns the roster plus the filenames of records that failed to
    /// parse; corrupt files are left in place for inspection.
    pub fn load_roster(&self) -> io::Result<(Roster, Vec<String>)> {
        let mut roster = Roster::new();
        let mut corrupt = Vec::new();

        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            let filename = match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            if !filename.starts_with("agent-") || !filename.ends_with(".json") {
                continue;
            }

            match fs::read_to_string(&path)
                .map_err(io::Error::from)
                .and_then(|json| {
                    serde_json::from_str::<Agent>(&json)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
                }) {
                Ok(agent) => roster.upsert(agent),
                Err(error) => {
                    log::warn!("skipping corrupt agent record {}: {}", filename, error);
                    corrupt.push(filename);
                }
            }
        }

        Ok((roster, corrupt))
    }

    /// Destructive reset: deletes every stored agent record.
    pub fn delete_all(&self) -> io::Result<()> {
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            let is_agent_file = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("agent-") && name.ends_with(".json"));
            if is_agent_file {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
