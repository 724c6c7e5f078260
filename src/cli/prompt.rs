use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use crate::descriptor::{
    parse_mosh_ports, validate, ConnectionInfo, ConnectionKind, SshOptions, ValidationVerdict,
    DEFAULT_MOSH_PORTS, DEFAULT_PORT,
};
use crate::dialog::ConnectionDialog;

use super::parse_option;

/// Line-based connection dialog over any reader/writer pair.
///
/// An empty host or end of input cancels. Bad answers are reported and the
/// question is repeated.
pub struct TerminalDialog<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label`, read one line. `None` on end of input.
    fn ask(&mut self, label: &str, default: Option<&str>) -> Result<Option<String>> {
        match default {
            Some(default) if !default.is_empty() => {
                write!(self.output, "  {label} {}: ", format!("[{default}]").dimmed())?;
            }
            _ => write!(self.output, "  {label}: ")?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(Some(default.unwrap_or_default().to_string()));
        }
        Ok(Some(answer.to_string()))
    }

    fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "  {} {message}", "x".red())?;
        Ok(())
    }

    fn ask_host(&mut self, initial: Option<&str>) -> Result<Option<String>> {
        loop {
            let Some(host) = self.ask("Host", initial)? else {
                return Ok(None);
            };
            if host.is_empty() {
                return Ok(None);
            }
            match validate(&ConnectionInfo::new(host.as_str())) {
                ValidationVerdict::Valid => return Ok(Some(host)),
                verdict => self.complain(&verdict.to_string())?,
            }
        }
    }

    fn ask_port(&mut self, initial: u16) -> Result<Option<u16>> {
        let default = initial.to_string();
        loop {
            let Some(answer) = self.ask("Port", Some(default.as_str()))? else {
                return Ok(None);
            };
            match answer.parse::<u16>() {
                Ok(port) if port != 0 => return Ok(Some(port)),
                _ => self.complain(&format!("'{answer}' is not a port between 1 and 65535"))?,
            }
        }
    }

    fn ask_options(&mut self, options: &mut SshOptions) -> Result<bool> {
        loop {
            let Some(answer) = self.ask("SSH option (NAME=VALUE, empty to finish)", None)?
            else {
                return Ok(false);
            };
            if answer.is_empty() {
                return Ok(true);
            }
            let inserted = parse_option(&answer)
                .and_then(|option| options.insert(option).map_err(anyhow::Error::from));
            if let Err(e) = inserted {
                self.complain(&e.to_string())?;
            }
        }
    }

    fn ask_kind(&mut self, initial: ConnectionKind) -> Result<Option<ConnectionKind>> {
        let default = if initial.is_mosh() { "y" } else { "n" };
        let Some(answer) = self.ask("Use mosh? (y/n)", Some(default))? else {
            return Ok(None);
        };
        if !answer.eq_ignore_ascii_case("y") {
            return Ok(Some(ConnectionKind::Ssh));
        }

        let (from, to) = match initial {
            ConnectionKind::Mosh { from, to } => (from, to),
            ConnectionKind::Ssh => DEFAULT_MOSH_PORTS,
        };
        let default = format!("{from}-{to}");
        loop {
            let Some(range) = self.ask("Mosh ports", Some(default.as_str()))? else {
                return Ok(None);
            };
            let kind = match parse_mosh_ports(&range) {
                Ok(kind) => kind,
                Err(e) => {
                    self.complain(&e.to_string())?;
                    continue;
                }
            };
            let mut probe = ConnectionInfo::new("localhost");
            probe.kind = kind;
            match validate(&probe) {
                ValidationVerdict::Valid => return Ok(Some(kind)),
                verdict => self.complain(&verdict.to_string())?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ConnectionDialog for TerminalDialog<R, W> {
    fn show(&mut self, initial: Option<&ConnectionInfo>) -> Result<Option<ConnectionInfo>> {
        let Some(host) = self.ask_host(initial.map(|i| i.host.as_str()))? else {
            return Ok(None);
        };
        let mut info = ConnectionInfo::new(host);

        let Some(username) = self.ask("Username", initial.map(|i| i.username.as_str()))? else {
            return Ok(None);
        };
        info.username = username;

        let Some(port) = self.ask_port(initial.map_or(DEFAULT_PORT, |i| i.port))? else {
            return Ok(None);
        };
        info.port = port;

        let identity = initial.and_then(ConnectionInfo::identity_file);
        let Some(identity) = self.ask("Identity file", identity)? else {
            return Ok(None);
        };
        info.identity_file = Some(identity).filter(|p| !p.is_empty());

        if let Some(initial) = initial {
            info.options = initial.options.clone();
            info.line_ending = initial.line_ending;
        }
        if !self.ask_options(&mut info.options)? {
            return Ok(None);
        }

        let Some(kind) = self.ask_kind(initial.map_or(ConnectionKind::Ssh, |i| i.kind))? else {
            return Ok(None);
        };
        info.kind = kind;

        tracing::debug!(host = %info.host, "connection dialog confirmed");
        Ok(Some(info))
    }
}
