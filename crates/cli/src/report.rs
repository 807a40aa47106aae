//! Provenance sidecars for benchmark artifacts.
//!
//! Every `--out` summary gets a `<stem>.provenance.json` neighbor so a
//! result file can be traced back to the code revision and parameters
//! that produced it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde_json::{json, Value};

/// What a benchmark invocation records next to its summary.
pub struct RunRecord {
    pub params: Value,
    pub outputs: Vec<String>,
}

/// Write the sidecar next to `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, record: RunRecord) -> Result<PathBuf> {
    let sidecar = sidecar_path(artifact);
    let doc = json!({
        "code_rev": code_rev(),
        "params": record.params,
        "outputs": record.outputs,
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// `a/b/summary.json` → `a/b/summary.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "summary".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Git revision: `GIT_COMMIT` env override, else `git rev-parse HEAD`.
pub fn code_rev() -> String {
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
