//! 32-bit FNV-1a digest over the canonical runlog string.

use crate::canon::canonical_string;
use crate::error::RunlogError;
use crate::model::RunLog;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// FNV-1a fold: one XOR-then-multiply step per byte. Canonical runlog
/// content is ASCII, so bytes and characters coincide.
pub fn fnv1a_32(s: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in s.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Canonical 8-hex-digit digest of a runlog.
///
/// A pure function of runlog content: serialization goes through
/// [`canonical_string`], which sorts mapping keys at every level.
pub fn runlog_hash(log: &RunLog) -> Result<String, RunlogError> {
    let value = serde_json::to_value(log)?;
    Ok(format!("{:08x}", fnv1a_32(&canonical_string(&value))))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
