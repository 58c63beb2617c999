use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use ternary::Triangle;

/// What produced an artifact: subcommand name, its params, and the layout.
pub struct Sidecar {
    pub command: &'static str,
    pub params: Value,
    pub apexes: Option<[[f64; 2]; 3]>,
}

impl Sidecar {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            apexes: None,
        }
    }

    pub fn with_triangle(mut self, tri: &Triangle) -> Self {
        self.apexes = Some(tri.apexes().map(|p| [p.x, p.y]));
        self
    }

    /// Document written next to artifacts and printed by `report`.
    #[track_caller]
    pub fn to_json(&self, outputs: &[String]) -> Value {
        let callsite = Location::caller();
        json!({
            "code_rev": current_git_rev(),
            "crate_version": ternary::VERSION,
            "command": self.command,
            "callsite": {
                "file": callsite.file(),
                "line": callsite.line()
            },
            "layout": { "apexes": self.apexes },
            "params": self.params,
            "outputs": outputs
        })
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, sidecar: &Sidecar) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = sidecar.to_json(&[artifact.to_string_lossy().into_owned()]);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
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
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
