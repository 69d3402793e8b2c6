//! External process execution
//!
//! Thin wrappers over `std::process::Command` that collapse every failure
//! into one of the packaging error kinds.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::command::CommandLine;
use crate::error::{PackagingError, PackagingResult, ProcessFailure};

/// Run `command` in `directory` and require a successful exit status.
///
/// The directory is not checked up front; spawning in a missing directory
/// fails like any other spawn error. Standard input is closed and the child's
/// output is captured and logged at `debug` level.
///
/// There is no timeout: a child that never exits blocks the caller.
pub fn execute(directory: &Path, command: &CommandLine) -> PackagingResult<()> {
    run(directory, command).map_err(|source| PackagingError::InvalidExitValue {
        command: command.to_string(),
        source,
    })
}

/// Check that each command can be run from the current directory.
///
/// Each command is executed without arguments, in order, stopping at the
/// first one that fails.
pub fn assert_availability(commands: &[&str]) -> PackagingResult<()> {
    assert_availability_with(commands, &[])
}

/// Same as [`assert_availability`], passing `probe_args` to every command.
pub fn assert_availability_with(commands: &[&str], probe_args: &[&str]) -> PackagingResult<()> {
    for command in commands {
        let call = CommandLine::new(*command).args(probe_args.iter().copied());
        run(Path::new("."), &call).map_err(|source| PackagingError::CommandUnavailable {
            command: (*command).to_string(),
            source,
        })?;
        debug!(command = %command, "command is available");
    }
    Ok(())
}

fn run(directory: &Path, command: &CommandLine) -> Result<(), ProcessFailure> {
    debug!(
        program = command.program(),
        args = ?command.arguments(),
        directory = %directory.display(),
        "spawning process"
    );

    let output = Command::new(command.program())
        .args(command.arguments())
        .current_dir(directory)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ProcessFailure::Spawn {
            program: command.program().to_string(),
            directory: directory.to_path_buf(),
            source,
        })?;

    log_output(command.program(), &output);

    if output.status.success() {
        Ok(())
    } else {
        Err(ProcessFailure::Exit {
            program: command.program().to_string(),
            status: output.status,
        })
    }
}

fn log_output(program: &str, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stdout.trim().is_empty() {
        debug!(program, stdout = %stdout.trim_end(), "process output");
    }
    if !stderr.trim().is_empty() {
        debug!(program, stderr = %stderr.trim_end(), "process error output");
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn execute_succeeds_on_zero_exit() {
        let dir = tempfile::tempdir().unwrap();
        execute(dir.path(), &CommandLine::new("true")).unwrap();
    }

    #[test]
    fn execute_reports_non_zero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(dir.path(), &CommandLine::new("false")).unwrap_err();

        match &err {
            PackagingError::InvalidExitValue { command, source } => {
                assert_eq!(command, "false");
                assert!(matches!(source, ProcessFailure::Exit { status, .. } if status.code() == Some(1)));
            }
            other => panic!("expected InvalidExitValue, got {other:?}"),
        }
    }

    #[test]
    fn execute_reports_spawn_failure_as_invalid_exit_value() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(
            dir.path(),
            &CommandLine::new("definitely-not-a-real-command-xyz").arg("--help"),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            PackagingError::InvalidExitValue {
                source: ProcessFailure::Spawn { .. },
                ..
            }
        ));
        assert!(err.source().is_some());
    }

    #[test]
    fn execute_runs_in_the_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "x").unwrap();

        let call = CommandLine::new("sh").args(["-c", "test -f marker"]);
        execute(dir.path(), &call).unwrap();

        let elsewhere = tempfile::tempdir().unwrap();
        assert!(execute(elsewhere.path(), &call).is_err());
    }

    #[test]
    fn execute_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = execute(&missing, &CommandLine::new("true")).unwrap_err();
        assert!(matches!(err, PackagingError::InvalidExitValue { .. }));
    }

    #[test]
    fn execute_closes_stdin() {
        let dir = tempfile::tempdir().unwrap();
        execute(dir.path(), &CommandLine::new("cat")).unwrap();
    }

    #[test]
    fn availability_of_existing_commands() {
        assert_availability(&["true"]).unwrap();
        assert_availability(&[]).unwrap();
    }

    #[test]
    fn availability_of_missing_command() {
        let err = assert_availability(&["definitely-not-a-real-command-xyz"]).unwrap_err();
        match err {
            PackagingError::CommandUnavailable { command, .. } => {
                assert_eq!(command, "definitely-not-a-real-command-xyz");
            }
            other => panic!("expected CommandUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn availability_stops_at_first_failure() {
        let err = assert_availability(&["true", "false", "definitely-not-a-real-command-xyz"])
            .unwrap_err();
        assert!(matches!(
            err,
            PackagingError::CommandUnavailable { ref command, .. } if command == "false"
        ));
    }

    #[test]
    fn availability_with_probe_args() {
        assert_availability_with(&["sh"], &["-c", "exit 0"]).unwrap();
        assert!(assert_availability_with(&["sh"], &["-c", "exit 3"]).is_err());
    }
}
