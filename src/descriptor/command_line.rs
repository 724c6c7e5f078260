use std::fmt;
use std::path::PathBuf;

use super::info::{ConnectionInfo, ConnectionKind};
use crate::executable::Executables;

/// An executable and the single argument string to launch it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub executable: PathBuf,
    pub arguments: String,
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.executable.display(), self.arguments)
    }
}

/// Turns connection info into `ssh`/`mosh` invocations.
///
/// Does not validate; callers run [`super::validate`] first.
#[derive(Debug, Clone)]
pub struct CommandLineBuilder {
    executables: Executables,
}

impl CommandLineBuilder {
    #[must_use]
    pub fn new(executables: Executables) -> Self {
        Self { executables }
    }

    /// Build the command line:
    /// `[-p port] [-i "identity"] [-o "name=value"]... user@host [from:to]`
    #[must_use]
    pub fn build(&self, info: &ConnectionInfo) -> CommandLine {
        let executable = match info.kind {
            ConnectionKind::Ssh => self.executables.ssh.clone(),
            ConnectionKind::Mosh { .. } => self.executables.mosh.clone(),
        };

        let mut args = Vec::new();

        if !info.has_default_port() {
            args.push(format!("-p {}", info.port));
        }

        if let Some(identity) = info.identity_file() {
            args.push(format!("-i \"{identity}\""));
        }

        for option in &info.options {
            args.push(format!("-o \"{}={}\"", option.name, option.value));
        }

        args.push(format!("{}@{}", info.username, info.host));

        if let ConnectionKind::Mosh { from, to } = info.kind {
            args.push(format!("{from}:{to}"));
        }

        let command = CommandLine {
            executable,
            arguments: args.join(" "),
        };
        tracing::debug!(command = %command, "built client command line");
        command
    }
}
