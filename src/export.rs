//! JSON export of the current analysis result.

use anyhow::Context;
use std::path::Path;

use crate::analysis::AnalysisResult;

/// Default file name offered for an exported result.
pub fn export_file_name(result: &AnalysisResult) -> String {
    format!("analysis-{}.json", result.id)
}

/// Pretty-printed JSON of the result exactly as held in state.
pub fn export_json(result: &AnalysisResult) -> anyhow::Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize analysis result")
}

/// Write the result as pretty JSON to `path`.
pub fn write_export(path: &Path, result: &AnalysisResult) -> anyhow::Result<()> {
    let json = export_json(result)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Exported analysis #{} to {}", result.id, path.display());
    Ok(())
}
