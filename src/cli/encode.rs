use anyhow::{Context, Result};

use crate::descriptor::{self, ConnectionInfo, ConnectionKind, SshOptions};

use super::{parse_option, parse_target};

pub fn run(
    target: &str,
    port: Option<u16>,
    identity: Option<String>,
    options: &[String],
    mosh: Option<&str>,
) -> Result<()> {
    let info = build_info(target, port, identity, options, mosh)?;
    println!("{}", descriptor::encode(&info)?);
    Ok(())
}

/// Assemble connection info from command-line arguments.
fn build_info(
    target: &str,
    port: Option<u16>,
    identity: Option<String>,
    options: &[String],
    mosh: Option<&str>,
) -> Result<ConnectionInfo> {
    let target = parse_target(target, port)?;

    let mut parsed = SshOptions::new();
    for arg in options {
        parsed.insert(parse_option(arg)?)?;
    }

    let kind = match mosh {
        Some(range) => descriptor::parse_mosh_ports(range)
            .with_context(|| format!("Invalid --mosh value '{range}'"))?,
        None => ConnectionKind::Ssh,
    };

    let mut info = ConnectionInfo::new(target.host);
    info.username = target.user;
    info.port = target.port;
    info.identity_file = identity.filter(|p| !p.is_empty());
    info.options = parsed;
    info.kind = kind;
    Ok(info)
}
