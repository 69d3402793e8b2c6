//! Command invocations
//!
//! A `CommandLine` is a program name followed by its arguments. It can never
//! be empty: the only infallible constructor takes the program.

use std::fmt;

use crate::error::EmptyCommandLine;

/// Program plus arguments, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// The full argument vector, program first
    pub fn to_vec(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl TryFrom<Vec<String>> for CommandLine {
    type Error = EmptyCommandLine;

    fn try_from(call: Vec<String>) -> Result<Self, Self::Error> {
        let mut parts = call.into_iter();
        let program = parts.next().ok_or(EmptyCommandLine)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl TryFrom<&[&str]> for CommandLine {
    type Error = EmptyCommandLine;

    fn try_from(call: &[&str]) -> Result<Self, Self::Error> {
        let (program, args) = call.split_first().ok_or(EmptyCommandLine)?;
        Ok(Self::new(*program).args(args.iter().copied()))
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
