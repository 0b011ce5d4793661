// Monthly ledger files on disk
// Writing and reading back the per-month JSON arrays.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::record::Transaction;

/// File name for one month: `ledger_{year}-{MM}.json`.
pub fn month_file_name(year: i32, month: u32) -> String {
    format!("ledger_{}-{:02}.json", year, month)
}

/// Write one month's records as a pretty-printed JSON array, overwriting
/// any existing file. serde_json writes non-ASCII code points literally,
/// which the Korean labels rely on.
pub fn write_month(path: &Path, records: &[Transaction]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)
        .with_context(|| format!("failed to serialize {} records", records.len()))?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Read one monthly ledger file back into records.
pub fn load_month(path: &Path) -> Result<Vec<Transaction>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let records = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(records)
}
