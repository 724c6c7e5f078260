use serde::{Deserialize, Serialize};

use super::options::SshOptions;

pub const DEFAULT_PORT: u16 = 22;

/// Port range mosh-server picks from when the client does not ask for one.
pub const DEFAULT_MOSH_PORTS: (u16, u16) = (60000, 61000);

/// Which client the descriptor targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConnectionKind {
    #[default]
    Ssh,
    /// Mosh with the UDP port range the client announces.
    Mosh { from: u16, to: u16 },
}

impl ConnectionKind {
    #[must_use]
    pub fn default_mosh() -> Self {
        let (from, to) = DEFAULT_MOSH_PORTS;
        Self::Mosh { from, to }
    }

    #[must_use]
    pub fn is_mosh(self) -> bool {
        matches!(self, Self::Mosh { .. })
    }

    #[must_use]
    pub fn scheme(self) -> &'static str {
        match self {
            Self::Ssh => "ssh",
            Self::Mosh { .. } => "mosh",
        }
    }
}

/// Line-ending translation applied to terminal input. Not interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEndingStyle {
    #[default]
    DoNotModify,
    ToCrlf,
    ToCr,
    ToLf,
}

/// A remote shell target and the options to reach it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub identity_file: Option<String>,
    #[serde(default)]
    pub options: SshOptions,
    #[serde(default)]
    pub kind: ConnectionKind,
    #[serde(default)]
    pub line_ending: LineEndingStyle,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ConnectionInfo {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            username: String::new(),
            identity_file: None,
            options: SshOptions::new(),
            kind: ConnectionKind::Ssh,
            line_ending: LineEndingStyle::default(),
        }
    }

    /// Identity file, treating an empty path as unset.
    #[must_use]
    pub fn identity_file(&self) -> Option<&str> {
        self.identity_file.as_deref().filter(|p| !p.is_empty())
    }

    #[must_use]
    pub fn has_default_port(&self) -> bool {
        self.port == DEFAULT_PORT
    }
}
