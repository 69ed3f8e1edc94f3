use crate::error::Result;
use crate::store::TermStore;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes the accumulated glossary as pretty-printed JSON. The file is
/// fully overwritten; there is no merge with a previous run.
pub fn write_terms(store: &TermStore, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path, json)?;
    info!("Saved {} entries to {}", store.len(), path.display());
    Ok(())
}
