//! Provenance records: what produced a plan file, from which inputs.
//!
//! Every artifact written by a planning command gets a sibling
//! `<stem>.provenance.json`; `report` prints the same record with no outputs.

use agriplot::plot::PlantingPlan;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
    code_rev: String,
}

/// Shape of the plan an artifact holds.
#[derive(Debug, Serialize, PartialEq)]
pub struct PlanSummary {
    pub crop: String,
    pub corners: usize,
    pub positions: usize,
}

impl From<&PlantingPlan> for PlanSummary {
    fn from(plan: &PlantingPlan) -> Self {
        Self {
            crop: plan.crop.clone(),
            corners: plan.polygon.len(),
            positions: plan.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Provenance {
    tool: Tool,
    command: &'static str,
    params: Value,
    inputs: Vec<PathBuf>,
    outputs: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<PlanSummary>,
}

impl Provenance {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            tool: Tool {
                name: "agriplot",
                version: agriplot::VERSION,
                code_rev: code_revision(),
            },
            command,
            params,
            inputs: Vec::new(),
            outputs: Vec::new(),
            plan: None,
        }
    }

    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(path.into());
        self
    }

    pub fn with_plan(mut self, plan: &PlantingPlan) -> Self {
        self.plan = Some(plan.into());
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Record `artifact` as the output and write the sidecar next to it.
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        self.outputs.push(artifact.to_path_buf());
        let path = sidecar_path(artifact);
        std::fs::write(&path, self.to_json()?)
            .with_context(|| format!("writing provenance {}", path.display()))?;
        tracing::debug!(path = %path.display(), "provenance_written");
        Ok(path)
    }
}

/// `dir/plan.csv` → `dir/plan.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    match artifact.file_name() {
        Some(_) => artifact.with_extension("provenance.json"),
        None => artifact.join("plan.provenance.json"),
    }
}

/// Commit the binary was built from: `GIT_COMMIT` at build time, then at run
/// time, then `git rev-parse`; `unknown` if none is available.
pub fn code_revision() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    let git = Command::new("git").args(["rev-parse", "HEAD"]).output();
    match git {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_owned(),
        _ => "unknown".to_owned(),
    }
}
