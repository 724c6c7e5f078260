mod command;
mod decode;
mod encode;
mod new;
pub mod prompt;
mod target;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub use target::{parse_option, parse_target, Target};

/// Translate ssh:// and mosh:// descriptors to and from client command lines
#[derive(Parser, Debug)]
#[command(name = "ssh-uri")]
#[command(version, about)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a descriptor URI and show its fields
    Decode {
        /// ssh:// or mosh:// URI
        uri: String,

        /// Print the decoded connection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a descriptor URI from connection details
    Encode {
        /// Target: [user@]host[:port]
        target: String,

        /// SSH port override
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Path to SSH private key
        #[arg(short = 'i', long)]
        identity: Option<String>,

        /// SSH option passed with -o (repeatable)
        #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
        options: Vec<String>,

        /// Use mosh with this UDP port range
        #[arg(long, value_name = "FROM-TO")]
        mosh: Option<String>,
    },

    /// Print the ssh/mosh command line for a descriptor URI
    Command {
        /// ssh:// or mosh:// URI
        uri: String,
    },

    /// Enter connection details interactively
    New,
}

/// Dispatch a CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the descriptor is malformed, the connection details
/// do not validate, or the terminal cannot be read.
pub fn run(command: Command) -> Result<()> {
    let settings = load_settings();

    match command {
        Command::Decode { uri, json } => decode::run(&uri, json, &settings),

        Command::Encode {
            target,
            port,
            identity,
            options,
            mosh,
        } => encode::run(&target, port, identity, &options, mosh.as_deref()),

        Command::Command { uri } => command::run(&uri, &settings),

        Command::New => new::run(&settings),
    }
}

fn load_settings() -> Settings {
    Settings::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load settings, using defaults: {:#}", e);
        Settings::default()
    })
}
