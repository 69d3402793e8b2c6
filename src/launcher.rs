//! Launcher script generation
//!
//! The launcher is a POSIX `sh` wrapper installed next to `checkcites.jar` in
//! a TeX distribution. At run time it derives its own name, asks `kpsewhich`
//! for the matching jar, converts paths under Cygwin and execs `java -jar`.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PackagingError, PackagingResult};

/// Launcher script content, written verbatim
pub const LAUNCHER_SCRIPT: &str = include_str!("templates/launcher.sh");

/// Write the launcher script to `path`, replacing any existing file.
pub fn create_script(path: &Path) -> PackagingResult<()> {
    fs::write(path, LAUNCHER_SCRIPT).map_err(|source| PackagingError::ScriptWriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote launcher script");
    Ok(())
}
