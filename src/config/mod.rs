//! Configuration for a packaging run
//!
//! Resolution order, highest priority first:
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables (`CHECKCITES_BUILD_*`)
//! 3. `packaging.toml`
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    apply_overrides, load, load_or_default, load_or_default_with_warnings, load_with_warnings,
    log_warning, with_env_overrides, ConfigError, ConfigWarning, ENV_OUT_DIR, ENV_VERSION,
};
pub use types::{Config, OutputConfig, PackageConfig, ToolsConfig};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "packaging.toml";
