//! checkcites-build - packaging helper for checkcites
//!
//! Used by the release pipeline to check that external tools are on the
//! path, run them with uniform error reporting, and generate the files that
//! ship alongside `checkcites.jar`: the `sh` launcher and the man page.

pub mod command;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod manpage;
pub mod package;
pub mod process;

// Re-exports for convenience
pub use command::CommandLine;
pub use config::Config;
pub use error::{EmptyCommandLine, PackagingError, PackagingResult, ProcessFailure};
pub use launcher::{create_script, LAUNCHER_SCRIPT};
pub use manpage::{create_man_page, man_page_date, MAN_PAGE_PLACEHOLDER};
pub use package::{Artifact, ArtifactKind, PackageReport};
pub use process::{assert_availability, assert_availability_with, execute};
