use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::{ArgumentError, FormatError};

/// Everything except RFC 3986 unreserved characters gets escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Option names with a meaning of their own, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellKnownOption {
    IdentityFile,
}

impl WellKnownOption {
    pub const ALL: [Self; 1] = [Self::IdentityFile];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IdentityFile => "IdentityFile",
        }
    }

    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }

    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.matches(name))
    }
}

/// A single `name=value` pair passed to the SSH client with `-o`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshOption {
    pub name: String,
    pub value: String,
}

impl SshOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered options with unique names (case-insensitive).
///
/// Reserved names from [`WellKnownOption`] are refused; they are stored in
/// dedicated fields of [`super::ConnectionInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SshOptions(Vec<SshOption>);

impl SshOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option, keeping insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, reserved, or already present.
    pub fn insert(&mut self, option: SshOption) -> Result<(), ArgumentError> {
        if option.name.is_empty() {
            return Err(ArgumentError::EmptyOptionName);
        }
        if let Some(known) = WellKnownOption::lookup(&option.name) {
            return Err(ArgumentError::ReservedOption {
                name: known.as_str().to_string(),
            });
        }
        if self.contains(&option.name) {
            return Err(ArgumentError::DuplicateOption { name: option.name });
        }
        self.0.push(option);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name))
            .map(|o| o.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SshOption> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SshOptions {
    type Item = &'a SshOption;
    type IntoIter = std::slice::Iter<'a, SshOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<SshOption>> for SshOptions {
    type Error = ArgumentError;

    fn try_from(options: Vec<SshOption>) -> Result<Self, Self::Error> {
        let mut out = Self::new();
        for option in options {
            out.insert(option)?;
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for SshOptions {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let options = Vec::<SshOption>::deserialize(deserializer)?;
        Self::try_from(options).map_err(serde::de::Error::custom)
    }
}

/// Percent-encode one URI component.
#[must_use]
pub fn percent_encode(text: &str) -> Cow<'_, str> {
    utf8_percent_encode(text, COMPONENT).into()
}

/// Percent-decode one URI component.
///
/// # Errors
///
/// Returns an error if the decoded bytes are not UTF-8.
pub fn percent_decode(text: &str) -> Result<Cow<'_, str>, FormatError> {
    percent_decode_str(text)
        .decode_utf8()
        .map_err(|_| FormatError::InvalidPercentEncoding {
            text: text.to_string(),
        })
}

/// Split a delimited `name=value` list into decoded pairs.
///
/// Duplicates are kept; callers decide what a repeated name means.
///
/// # Errors
///
/// Returns an error for a token without exactly one `=`, with an empty name,
/// or with invalid percent-encoding.
pub fn decode_options(delimiter: char, raw: &str) -> Result<Vec<SshOption>, FormatError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split(delimiter)
        .map(|token| {
            let malformed = || FormatError::MalformedOption {
                token: token.to_string(),
            };
            let (name, value) = token.split_once('=').ok_or_else(malformed)?;
            if name.is_empty() || value.contains('=') {
                return Err(malformed());
            }
            Ok(SshOption::new(percent_decode(name)?, percent_decode(value)?))
        })
        .collect()
}

/// Render one option as `name=value`, both sides percent-encoded.
///
/// # Errors
///
/// Returns an error if the option name is empty.
pub fn encode_option(option: &SshOption) -> Result<String, ArgumentError> {
    if option.name.is_empty() {
        return Err(ArgumentError::EmptyOptionName);
    }
    let value = if option.value.is_empty() {
        Cow::Borrowed("")
    } else {
        percent_encode(&option.value)
    };
    Ok(format!("{}={value}", percent_encode(&option.name)))
}
