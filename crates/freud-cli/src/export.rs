//! Runlog export. Serialization to disk is a consumer concern; the engine
//! itself never touches the filesystem.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use freud_runlog::RunLog;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write a runlog as pretty-printed JSON.
pub fn write_runlog(path: &Path, log: &RunLog) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut w, log)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
