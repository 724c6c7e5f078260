//! `ssh://` and `mosh://` descriptor codec.
//!
//! ```text
//! ssh://user;IdentityFile=%2Fhome%2Fk,Compression=yes@host:2222
//! mosh://user@host?mosh_ports=60001-60010
//! ```
//!
//! URIs are split by hand: generic URL parsers re-escape `;` and `=` inside
//! the user info, which is where the option list lives.

use once_cell::sync::Lazy;
use regex::Regex;

use super::info::{ConnectionInfo, ConnectionKind};
use super::options::{
    decode_options, encode_option, percent_decode, percent_encode, WellKnownOption,
};
use super::validation::validate;
use crate::error::{ArgumentError, FormatError};

const SSH_SCHEME: &str = "ssh";
const MOSH_SCHEME: &str = "mosh";

/// Query parameter names accepted for the mosh port range. The first one is
/// what `encode` writes.
const MOSH_PORTS_PARAMS: [&str; 2] = ["mosh_ports", "mosh-ports"];

static MOSH_PORTS_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,5})[:-](\d{1,5})$").expect("valid mosh ports pattern"));

/// Whether `uri` starts with a scheme this codec handles.
#[must_use]
pub fn is_recognized_scheme(uri: &str) -> bool {
    split_scheme(uri).is_some()
}

/// Parse a descriptor URI.
///
/// # Errors
///
/// Returns a [`FormatError`] describing the first malformed part of `uri`.
pub fn decode(uri: &str) -> Result<ConnectionInfo, FormatError> {
    let (kind, rest) = split_scheme(uri).ok_or_else(|| FormatError::UnrecognizedScheme {
        uri: uri.to_string(),
    })?;

    // Authority runs up to the path, query or fragment
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);
    let tail = tail.split_once('#').map_or(tail, |(before, _)| before);
    let query = tail.split_once('?').map(|(_, query)| query);

    let (user_info, host_port) = match authority.rsplit_once('@') {
        Some((user_info, host_port)) => (Some(user_info), host_port),
        None => (None, authority),
    };

    let (host, port) = split_host_port(host_port).ok_or_else(|| FormatError::MissingHost {
        uri: uri.to_string(),
    })?;
    let host = percent_decode(host)?;
    if host.is_empty() {
        return Err(FormatError::MissingHost {
            uri: uri.to_string(),
        });
    }

    let mut info = ConnectionInfo::new(host);
    info.kind = kind;

    if let Some(port) = port.filter(|p| !p.is_empty()) {
        let invalid = || FormatError::InvalidPort {
            port: port.to_string(),
        };
        // `u16::from_str` would also take a leading '+'
        if !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        info.port = port.parse().map_err(|_| invalid())?;
    }

    if let Some(user_info) = user_info {
        decode_user_info(user_info, &mut info)?;
    }

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        if !info.kind.is_mosh() {
            return Err(FormatError::QueryNotSupported {
                query: query.to_string(),
            });
        }
        for param in decode_options('&', query)? {
            if !MOSH_PORTS_PARAMS
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(&param.name))
            {
                return Err(FormatError::UnknownQueryParameter { name: param.name });
            }
            info.kind = parse_mosh_ports(&param.value)?;
        }
    }

    tracing::debug!(
        host = %info.host,
        port = info.port,
        options = info.options.len(),
        mosh = info.kind.is_mosh(),
        "decoded connection descriptor"
    );
    Ok(info)
}

/// Render `info` as a canonical descriptor URI.
///
/// # Errors
///
/// Returns [`ArgumentError::Invalid`] when `info` does not validate, or an
/// option error for an empty option name.
pub fn encode(info: &ConnectionInfo) -> Result<String, ArgumentError> {
    let verdict = validate(info);
    if !verdict.is_valid() {
        return Err(ArgumentError::Invalid(verdict));
    }

    let mut uri = format!("{}://", info.kind.scheme());
    let mut has_user_info = false;

    if !info.username.is_empty() {
        uri.push_str(&percent_encode(&info.username));
        has_user_info = true;
    }

    if info.identity_file().is_some() || !info.options.is_empty() {
        let mut items = Vec::with_capacity(info.options.len() + 1);
        if let Some(path) = info.identity_file() {
            items.push(format!(
                "{}={}",
                WellKnownOption::IdentityFile.as_str(),
                percent_encode(path)
            ));
        }
        for option in &info.options {
            items.push(encode_option(option)?);
        }
        uri.push(';');
        uri.push_str(&items.join(","));
        has_user_info = true;
    }

    if has_user_info {
        uri.push('@');
    }

    uri.push_str(&info.host);

    if !info.has_default_port() {
        uri.push(':');
        uri.push_str(&info.port.to_string());
    }

    if let ConnectionKind::Mosh { from, to } = info.kind {
        uri.push_str(&format!("?{}={from}-{to}", MOSH_PORTS_PARAMS[0]));
    }

    tracing::debug!(host = %info.host, "encoded connection descriptor");
    Ok(uri)
}

fn split_scheme(uri: &str) -> Option<(ConnectionKind, &str)> {
    let (scheme, rest) = uri.split_once("://")?;
    if scheme.eq_ignore_ascii_case(SSH_SCHEME) {
        Some((ConnectionKind::Ssh, rest))
    } else if scheme.eq_ignore_ascii_case(MOSH_SCHEME) {
        Some((ConnectionKind::default_mosh(), rest))
    } else {
        None
    }
}

/// Split `host[:port]`, keeping the brackets of an IPv6 literal in the host.
fn split_host_port(host_port: &str) -> Option<(&str, Option<&str>)> {
    if host_port.starts_with('[') {
        let close = host_port.find(']')?;
        let (host, rest) = host_port.split_at(close + 1);
        if rest.is_empty() {
            return Some((host, None));
        }
        // Anything after the bracket must be a port
        return Some((host, Some(rest.strip_prefix(':').unwrap_or(rest))));
    }

    match host_port.rsplit_once(':') {
        Some((host, port)) => Some((host, Some(port))),
        None => Some((host_port, None)),
    }
}

fn decode_user_info(user_info: &str, info: &mut ConnectionInfo) -> Result<(), FormatError> {
    let mut segments = user_info.split(';');
    let username = segments.next().unwrap_or_default();
    let options = segments.next();
    if segments.next().is_some() {
        return Err(FormatError::TooManyUserInfoSegments {
            user_info: user_info.to_string(),
        });
    }

    info.username = percent_decode(username)?.into_owned();

    let Some(options) = options else {
        return Ok(());
    };

    for option in decode_options(',', options)? {
        if WellKnownOption::IdentityFile.matches(&option.name) {
            info.identity_file = Some(option.value);
            continue;
        }
        let name = option.name.clone();
        info.options
            .insert(option)
            .map_err(|_| FormatError::DuplicateOption { name })?;
    }
    Ok(())
}

/// Parse a `<from>-<to>` (or `<from>:<to>`) mosh port range.
///
/// # Errors
///
/// Returns [`FormatError::InvalidMoshPorts`] if `value` is not such a range
/// or a bound exceeds 65535.
pub fn parse_mosh_ports(value: &str) -> Result<ConnectionKind, FormatError> {
    let invalid = || FormatError::InvalidMoshPorts {
        value: value.to_string(),
    };
    let captures = MOSH_PORTS_RANGE.captures(value).ok_or_else(invalid)?;
    let from = captures[1].parse().map_err(|_| invalid())?;
    let to = captures[2].parse().map_err(|_| invalid())?;
    Ok(ConnectionKind::Mosh { from, to })
}
