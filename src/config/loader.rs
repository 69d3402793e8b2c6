//! Configuration loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use super::types::Config;

/// Overrides `package.version`
pub const ENV_VERSION: &str = "CHECKCITES_BUILD_VERSION";
/// Overrides `output.dir`
pub const ENV_OUT_DIR: &str = "CHECKCITES_BUILD_OUT_DIR";

/// Errors while reading `packaging.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {file}")]
    Read {
        file: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("invalid package name '{name}' in {file}: {reason}")]
    InvalidName {
        file: PathBuf,
        name: String,
        reason: &'static str,
    },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration from a TOML file, logging unknown keys
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let (config, warnings) = load_with_warnings(path)?;
    for warning in &warnings {
        log_warning(warning);
    }
    Ok(config)
}

/// Log one unknown-key warning at `warn` level
pub fn log_warning(warning: &ConfigWarning) {
    warn!(
        key = %warning.key,
        file = %warning.file.display(),
        line = ?warning.line,
        suggestion = ?warning.suggestion,
        "unknown config key"
    );
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown: Vec<String> = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |p| {
            unknown.push(p.to_string())
        })
        .map_err(|e| ConfigError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_name(&config.package.name).map_err(|reason| ConfigError::InvalidName {
        file: path.to_path_buf(),
        name: config.package.name.clone(),
        reason,
    })?;

    let warnings = unknown
        .iter()
        .map(|dotted| {
            let (table, key) = dotted.rsplit_once('.').unwrap_or(("", dotted.as_str()));
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: locate_key(&content, dotted),
                suggestion: suggest_key(table, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `path` if it exists, otherwise start from defaults. Environment
/// overrides are applied either way.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    let (config, warnings) = load_or_default_with_warnings(path)?;
    for warning in &warnings {
        log_warning(warning);
    }
    Ok(config)
}

/// Like [`load_or_default`], handing unknown-key warnings to the caller
/// instead of logging them.
pub fn load_or_default_with_warnings(
    path: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let (config, warnings) = if path.exists() {
        load_with_warnings(path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (CHECKCITES_BUILD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(version) = lookup(ENV_VERSION).filter(|v| !v.trim().is_empty()) {
        config.package.version = version.trim().to_string();
    }

    if let Some(dir) = lookup(ENV_OUT_DIR).filter(|v| !v.trim().is_empty()) {
        config.output.dir = PathBuf::from(dir);
    }

    config
}

/// Reject names that would not be a plain file inside the output directory.
fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("the name must not be empty");
    }
    if name.contains(['/', '\\']) {
        return Err("the name must not contain path separators");
    }
    if name == "." || name == ".." {
        return Err("the name must be a file name");
    }
    Ok(())
}

/// 1-based line where the dotted key `path` is assigned, tracking the
/// current `[table]` header. `None` when the key is not found.
fn locate_key(content: &str, path: &str) -> Option<usize> {
    let mut table = String::new();
    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.starts_with('[') {
            table = line
                .trim_start_matches('[')
                .split(']')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            continue;
        }
        let Some((lhs, _)) = line.split_once('=') else {
            continue;
        };
        let key = lhs.trim().trim_matches('"');
        let full = if table.is_empty() {
            key.to_string()
        } else {
            format!("{table}.{key}")
        };
        if full == path {
            return Some(i + 1);
        }
    }
    None
}

/// Closest known key within the same table, if it is a likely typo.
fn suggest_key(table: &str, unknown: &str) -> Option<String> {
    let known: &[&str] = match table {
        "" => &["package", "output", "tools"],
        "package" => &["name", "version"],
        "output" => &["dir"],
        "tools" => &["required", "probe_args"],
        _ => &[],
    };

    known
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate.to_string())
}

/// Levenshtein distance over chars, single rolling row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != *cb));
            diagonal = above;
        }
    }

    row[b.len()]
}
