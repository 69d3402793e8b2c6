//! Full packaging step
//!
//! Checks the required tools, then writes the launcher and the man page into
//! the output directory. Stops at the first failure.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::config::Config;
use crate::error::{PackagingError, PackagingResult};
use crate::launcher::{create_script, LAUNCHER_SCRIPT};
use crate::manpage::{create_man_page, MAN_PAGE_PLACEHOLDER};
use crate::process::assert_availability_with;

/// Kind of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Launcher,
    ManPage,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Launcher => write!(f, "launcher"),
            ArtifactKind::ManPage => write!(f, "man page"),
        }
    }
}

/// A file written by the packaging step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// `sha256:<hex>` of the written content
    pub sha256: String,
}

impl Artifact {
    fn new(kind: ArtifactKind, path: PathBuf, content: &str) -> Self {
        Self {
            kind,
            path,
            sha256: content_digest(content),
        }
    }
}

/// Outcome of a successful packaging run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub name: String,
    pub version: String,
    pub checked_tools: Vec<String>,
    pub artifacts: Vec<Artifact>,
}

/// Run the packaging step described by `config`.
pub fn run(config: &Config) -> PackagingResult<PackageReport> {
    let tools: Vec<&str> = config.tools.required.iter().map(String::as_str).collect();
    let probe_args: Vec<&str> = config.tools.probe_args.iter().map(String::as_str).collect();
    assert_availability_with(&tools, &probe_args)?;

    let out_dir = config.output_dir();
    fs::create_dir_all(out_dir).map_err(|source| PackagingError::ScriptWriteFailed {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let script_path = config.script_path();
    create_script(&script_path)?;

    let man_page_path = config.man_page_path();
    create_man_page(&man_page_path, &config.package.version)?;

    let report = PackageReport {
        name: config.package.name.clone(),
        version: config.package.version.clone(),
        checked_tools: config.tools.required.clone(),
        artifacts: vec![
            Artifact::new(ArtifactKind::Launcher, script_path, LAUNCHER_SCRIPT),
            Artifact::new(ArtifactKind::ManPage, man_page_path, MAN_PAGE_PLACEHOLDER),
        ],
    };
    info!(
        name = %report.name,
        version = %report.version,
        artifacts = report.artifacts.len(),
        "packaging complete"
    );
    Ok(report)
}

/// Compute `sha256:<hex>` for generated content
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}
