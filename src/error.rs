use thiserror::Error;

use crate::descriptor::ValidationVerdict;

/// Malformed descriptor text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unrecognized scheme in '{uri}': expected ssh:// or mosh://")]
    UnrecognizedScheme { uri: String },

    #[error("missing host in '{uri}'")]
    MissingHost { uri: String },

    #[error("invalid port '{port}'")]
    InvalidPort { port: String },

    #[error("invalid percent-encoding in '{text}'")]
    InvalidPercentEncoding { text: String },

    #[error("user info '{user_info}' has more than one ';' separator")]
    TooManyUserInfoSegments { user_info: String },

    #[error("invalid option '{token}': expected name=value")]
    MalformedOption { token: String },

    #[error("option '{name}' defined more than once")]
    DuplicateOption { name: String },

    #[error("query parameters not supported for ssh:// URIs: '{query}'")]
    QueryNotSupported { query: String },

    #[error("unknown query parameter '{name}'")]
    UnknownQueryParameter { name: String },

    #[error("invalid mosh ports range '{value}': expected <from>-<to>")]
    InvalidMoshPorts { value: String },
}

/// Invalid structured input handed to an encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("option name must not be empty")]
    EmptyOptionName,

    #[error("option '{name}' defined more than once")]
    DuplicateOption { name: String },

    #[error("'{name}' is reserved and has its own field")]
    ReservedOption { name: String },

    #[error("invalid connection info: {0}")]
    Invalid(ValidationVerdict),
}
