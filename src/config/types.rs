//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// What is being packaged
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
        }
    }
}

fn default_name() -> String {
    "checkcites".to_string()
}

fn default_version() -> String {
    "0.0.0".to_string()
}

/// Where artifacts are written
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build/dist")
}

/// External tools that must be present before packaging
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub required: Vec<String>,

    /// Arguments passed to each tool when probing it
    #[serde(default)]
    pub probe_args: Vec<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

impl Config {
    /// Launcher script location
    pub fn script_path(&self) -> PathBuf {
        self.output.dir.join(&self.package.name)
    }

    /// Man page location (`<name>.1`)
    pub fn man_page_path(&self) -> PathBuf {
        self.output.dir.join(format!("{}.1", self.package.name))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output.dir
    }
}
