use checkcites_build::config::ConfigError;
use checkcites_build::PackagingError;
use serde::Serialize;

use super::ci::{github_actions_annotation, is_github_actions, AnnotationLevel};

#[derive(Debug, Serialize)]
struct ErrorEvent<'a> {
    event: &'static str,
    kind: &'static str,
    message: String,
    causes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a std::path::Path>,
}

/// Stable name of the error kind, for JSON consumers
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    if let Some(packaging) = err.downcast_ref::<PackagingError>() {
        return match packaging {
            PackagingError::CommandUnavailable { .. } => "command-unavailable",
            PackagingError::InvalidExitValue { .. } => "invalid-exit-value",
            PackagingError::ScriptWriteFailed { .. } => "script-write-failed",
            PackagingError::ManPageWriteFailed { .. } => "man-page-write-failed",
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "config";
    }
    "other"
}

fn error_path(err: &anyhow::Error) -> Option<&std::path::Path> {
    if let Some(packaging) = err.downcast_ref::<PackagingError>() {
        return packaging.path();
    }
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::Read { file, .. })
        | Some(ConfigError::Parse { file, .. })
        | Some(ConfigError::InvalidName { file, .. }) => Some(file.as_path()),
        None => None,
    }
}

/// Human rendering: the message, then each cause on its own line
pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let event = ErrorEvent {
            event: "error",
            kind: error_kind(err),
            message: err.to_string(),
            causes: err.chain().skip(1).map(|c| c.to_string()).collect(),
            path: error_path(err),
        };
        let _ = super::json::emit(&event);
        return;
    }

    if is_github_actions() {
        let file = error_path(err).map(|p| p.to_string_lossy().to_string());
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                None,
                Some("checkcites-build"),
            )
        );
    }

    eprint!("{}", format_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkcites_build::ProcessFailure;
    use std::path::PathBuf;

    #[test]
    fn kind_names_follow_the_packaging_error() {
        let err = anyhow::Error::new(PackagingError::ScriptWriteFailed {
            path: PathBuf::from("dist/checkcites"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(error_kind(&err), "script-write-failed");
        assert_eq!(error_path(&err), Some(std::path::Path::new("dist/checkcites")));

        let other = anyhow::anyhow!("boom");
        assert_eq!(error_kind(&other), "other");
        assert_eq!(error_path(&other), None);
    }

    #[test]
    fn config_errors_carry_the_file() {
        let err = anyhow::Error::new(ConfigError::InvalidName {
            file: PathBuf::from("packaging.toml"),
            name: "../x".to_string(),
            reason: "the name must not contain path separators",
        });
        assert_eq!(error_kind(&err), "config");
        assert_eq!(error_path(&err), Some(std::path::Path::new("packaging.toml")));
    }

    #[test]
    fn format_error_lists_causes() {
        let err = anyhow::Error::new(PackagingError::InvalidExitValue {
            command: "false".to_string(),
            source: ProcessFailure::Spawn {
                program: "false".to_string(),
                directory: PathBuf::from("."),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            },
        });

        let rendered = format_error(&err);
        assert!(rendered.starts_with("[ERROR] the command call 'false'"));
        assert!(rendered.contains("  caused by: failed to start 'false'"));
        assert!(rendered.ends_with("  caused by: not found\n"));
    }
}
