//! Manual page generation
//!
//! Only a placeholder is written for now. The date a real page would carry
//! in its `.TH` header is still computed and logged.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::error::{PackagingError, PackagingResult};

/// Placeholder man page content
pub const MAN_PAGE_PLACEHOLDER: &str = include_str!("templates/checkcites.1");

/// Format a date the way the man page header expects it (`05 March 2026`).
pub fn man_page_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// Write the man page to `path`, replacing any existing file.
///
/// `version` does not affect the content yet.
pub fn create_man_page(path: &Path, version: &str) -> PackagingResult<()> {
    let today = man_page_date(Local::now().date_naive());
    debug!(%today, version, "man page date computed");

    fs::write(path, MAN_PAGE_PLACEHOLDER).map_err(|source| PackagingError::ManPageWriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), version, "wrote man page");
    Ok(())
}
