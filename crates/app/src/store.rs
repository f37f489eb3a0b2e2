//! Snapshot file handling: the host side of the persistence boundary.
//!
//! The engine only ever sees the in-memory collections; this module is the
//! collaborator that produces and saves them. The on-disk shape is the
//! entity schema itself, serialized as JSON.
use std::{fs, path::Path};

use engine::Snapshot;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub fn load(path: &Path) -> Result<Snapshot> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
    let snapshot = serde_json::from_str(&raw)
        .map_err(|err| format!("cannot parse {}: {err}", path.display()))?;
    Ok(snapshot)
}

pub fn save(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let mut raw = serde_json::to_string_pretty(snapshot)?;
    raw.push('\n');
    fs::write(path, raw).map_err(|err| format!("cannot write {}: {err}", path.display()))?;
    Ok(())
}
