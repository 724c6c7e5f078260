use anyhow::{anyhow, Result};

use crate::descriptor::{SshOption, DEFAULT_PORT};

/// Parsed `[user@]host[:port]` target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub user: String,
    pub host: String,
    pub port: u16,
}

/// Parse target format:
///   host              — no user, default port
///   user@host         — default port
///   user@host:port    — custom port
///   user@[::1]:port   — IPv6 literal, brackets kept
///
/// # Errors
///
/// Returns an error if the user or host is empty or the port is not a number.
pub fn parse_target(target: &str, port_override: Option<u16>) -> Result<Target> {
    let (user, host_port) = match target.rsplit_once('@') {
        Some((user, host_port)) => {
            if user.is_empty() {
                return Err(anyhow!("Invalid target: empty username before '@'"));
            }
            (user, host_port)
        }
        None => ("", target),
    };

    let (host, port) = if let Some(rest) = host_port.strip_prefix('[') {
        let (inner, after) = rest
            .split_once(']')
            .ok_or_else(|| anyhow!("Invalid target: unterminated '[' in host"))?;
        let host = &host_port[..inner.len() + 2];
        match after {
            "" => (host, None),
            _ => {
                let port = after
                    .strip_prefix(':')
                    .ok_or_else(|| anyhow!("Invalid target: unexpected '{after}' after host"))?;
                (host, Some(port))
            }
        }
    } else {
        match host_port.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    if host.is_empty() {
        return Err(anyhow!("Invalid target: empty hostname"));
    }

    let port = match port {
        Some(port) => port
            .parse()
            .map_err(|_| anyhow!("Invalid target: '{port}' is not a port number"))?,
        None => DEFAULT_PORT,
    };

    Ok(Target {
        user: user.to_string(),
        host: host.to_string(),
        port: port_override.unwrap_or(port),
    })
}

/// Parse a `NAME=VALUE` option argument. The value may be empty.
///
/// # Errors
///
/// Returns an error if there is no `=` or the name is empty.
pub fn parse_option(arg: &str) -> Result<SshOption> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid option '{arg}': expected NAME=VALUE"))?;
    if name.is_empty() {
        return Err(anyhow!("Invalid option '{arg}': empty name"));
    }
    Ok(SshOption::new(name, value))
}
