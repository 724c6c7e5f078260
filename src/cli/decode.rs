use anyhow::{bail, Result};
use colored::Colorize;

use crate::config::Settings;
use crate::descriptor::{self, ConnectionInfo, ConnectionKind};

pub fn run(uri: &str, json: bool, settings: &Settings) -> Result<()> {
    if !descriptor::is_recognized_scheme(uri) {
        bail!("Not an ssh:// or mosh:// URI: {uri}");
    }

    let mut info = descriptor::decode(uri)?;
    info.line_ending = settings.line_ending;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_info(&info);
    }
    Ok(())
}

/// Print a connection in the same layout for every subcommand.
pub(super) fn print_info(info: &ConnectionInfo) {
    let user = if info.username.is_empty() {
        "(none)".dimmed()
    } else {
        info.username.cyan()
    };
    println!("  {}     {}", "host:".dimmed(), info.host.cyan());
    println!("  {}     {}", "port:".dimmed(), info.port.to_string().cyan());
    println!("  {}     {}", "user:".dimmed(), user);
    if let Some(identity) = info.identity_file() {
        println!("  {} {}", "identity:".dimmed(), identity.cyan());
    }
    for option in &info.options {
        println!(
            "  {}   {}={}",
            "option:".dimmed(),
            option.name.bold(),
            option.value
        );
    }
    match info.kind {
        ConnectionKind::Ssh => println!("  {}   {}", "client:".dimmed(), "ssh".cyan()),
        ConnectionKind::Mosh { from, to } => println!(
            "  {}   {} {}",
            "client:".dimmed(),
            "mosh".cyan(),
            format!("(ports {from}-{to})").dimmed(),
        ),
    }
}
