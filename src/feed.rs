use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::records::{MatchRecord, Transaction};

// Snapshot loaders for the real data sources. The backend serves records in
// exactly this shape; until it is wired in, a JSON file on disk stands in.

pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read transactions snapshot {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parse transactions snapshot {}", path.display()))
}

pub fn load_matches(path: &Path) -> Result<Vec<MatchRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read matches snapshot {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parse matches snapshot {}", path.display()))
}
