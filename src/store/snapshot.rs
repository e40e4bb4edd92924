//! Checksummed binary snapshot of the shared classroom state.
//!
//! Holds the live feed and the game-over flag in one file:
//! - Version magic (8 bytes)
//! - Data length (4 bytes)
//! - Bincode-serialized snapshot (variable length)
//! - SHA256 checksum (32 bytes)

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::core::constants::SNAPSHOT_VERSION_MAGIC;
use crate::events::LiveEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomSnapshot {
    pub events: Vec<LiveEvent>,
    pub game_over: bool,
}

/// Writes the snapshot with checksum trailer.
pub fn save_snapshot(path: &Path, snapshot: &ClassroomSnapshot) -> io::Result<()> {
    let data = bincode::serialize(snapshot)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let data_len = data.len() as u32;

    let mut hasher = Sha256::new();
    hasher.update(SNAPSHOT_VERSION_MAGIC.to_le_bytes());
    hasher.update(data_len.to_le_bytes());
    hasher.update(&data);
    let checksum = hasher.finalize();

    let mut file = fs::File::create(path)?;
    file.write_all(&SNAPSHOT_VERSION_MAGIC.to_le_bytes())?;
    file.write_all(&data_len.to_le_bytes())?;
    file.write_all(&data)?;
    file.write_all(&checksum)?;
    Ok(())
}

/// Loads and verifies a snapshot.
///
/// Fails on a wrong magic, a checksum mismatch, or undecodable data; the
/// caller falls back to a fresh snapshot in all of those cases.
pub fn load_snapshot(path: &Path) -> io::Result<ClassroomSnapshot> {
    let mut file = fs::File::open(path)?;

    let mut magic_bytes = [0u8; 8];
    file.read_exact(&mut magic_bytes)?;
    let magic = u64::from_le_bytes(magic_bytes);
    if magic != SNAPSHOT_VERSION_MAGIC {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Invalid snapshot version: expected 0x{:016X}, got 0x{:016X}",
                SNAPSHOT_VERSION_MAGIC, magic
            ),
        ));
    }

    let mut length_bytes = [0u8; 4];
    file.read_exact(&mut length_bytes)?;
    let data_len = u32::from_le_bytes(length_bytes);

    let mut data = vec![0u8; data_len as usize];
    file.read_exact(&mut data)?;

    let mut stored_checksum = [0u8; 32];
    file.read_exact(&mut stored_checksum)?;

    let mut hasher = Sha256::new();
    hasher.update(magic_bytes);
    hasher.update(length_bytes);
    hasher.update(&data);
    if stored_checksum != hasher.finalize().as_slice() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Checksum verification failed",
        ));
    }

    bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventKind, LiveFeed};
    use std::env;
    use std::path::PathBuf;

    fn temp_path() -> PathBuf {
        env::temp_dir().join(format!("brain-heist-snapshot-{}.dat", uuid::Uuid::new_v4()))
    }

    fn sample_snapshot() -> ClassroomSnapshot {
        let mut feed = LiveFeed::with_boot_banner(0);
        feed.push(EventKind::HackSuccess, "Cipher struck.".to_string(), 10);
        feed.react(
            &feed.latest().unwrap().id.clone(),
            &"glitch".to_string(),
            "🔥",
        );
        ClassroomSnapshot {
            events: feed.into_events(),
            game_over: false,
        }
    }

    #[test]
    fn test_snapshot_round_trip() {
        let path = temp_path();
        let snapshot = sample_snapshot();

        save_snapshot(&path, &snapshot).unwrap();
        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, snapshot);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupted_payload_is_rejected() {
        let path = temp_path();
        save_snapshot(&path, &sample_snapshot()).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        let flip_at = bytes.len() / 2;
        bytes[flip_at] ^= 0xFF;
        fs::write(&path, bytes).unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_errors() {
        let err = load_snapshot(&temp_path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
