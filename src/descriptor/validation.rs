use std::fmt;

use super::info::{ConnectionInfo, ConnectionKind};

/// Outcome of checking a [`ConnectionInfo`] before it is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationVerdict {
    Valid,
    HostEmpty,
    HostInvalid,
    PortZero,
    MoshPortZero,
    MoshRangeInverted,
}

impl ValidationVerdict {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl fmt::Display for ValidationVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Valid => "valid",
            Self::HostEmpty => "host is empty",
            Self::HostInvalid => "host contains characters not allowed in a URI host",
            Self::PortZero => "port must be between 1 and 65535",
            Self::MoshPortZero => "mosh ports must be between 1 and 65535",
            Self::MoshRangeInverted => "mosh port range starts after it ends",
        };
        f.write_str(message)
    }
}

/// Check the fields a descriptor must carry. The first failure wins.
#[must_use]
pub fn validate(info: &ConnectionInfo) -> ValidationVerdict {
    if info.host.is_empty() {
        return ValidationVerdict::HostEmpty;
    }
    if !is_valid_host(&info.host) {
        return ValidationVerdict::HostInvalid;
    }
    if info.port == 0 {
        return ValidationVerdict::PortZero;
    }
    if let ConnectionKind::Mosh { from, to } = info.kind {
        if from == 0 || to == 0 {
            return ValidationVerdict::MoshPortZero;
        }
        if from > to {
            return ValidationVerdict::MoshRangeInverted;
        }
    }
    ValidationVerdict::Valid
}

fn is_valid_host(host: &str) -> bool {
    if host
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '@' | '/' | '?' | '#' | ';' | '%'))
    {
        return false;
    }
    // Colons only inside an IPv6 literal
    match host.strip_prefix('[') {
        Some(rest) => rest.strip_suffix(']').is_some_and(|inner| !inner.contains(['[', ']'])),
        None => !host.contains([':', '[', ']']),
    }
}
