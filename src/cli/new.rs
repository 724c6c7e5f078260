use anyhow::Result;
use colored::Colorize;

use crate::config::Settings;
use crate::descriptor;
use crate::dialog::ConnectionDialog;

use super::decode::print_info;
use super::prompt::TerminalDialog;

pub fn run(settings: &Settings) -> Result<()> {
    let stdin = std::io::stdin();
    let mut dialog = TerminalDialog::new(stdin.lock(), std::io::stdout());

    let Some(mut info) = dialog.show(None)? else {
        println!("  {}", "Cancelled.".dimmed());
        return Ok(());
    };
    info.line_ending = settings.line_ending;

    let uri = descriptor::encode(&info)?;
    let command = settings.command_line_builder().build(&info);

    println!();
    print_info(&info);
    println!("  {}      {}", "uri:".dimmed(), uri.bold());
    println!("  {}  {}", "command:".dimmed(), command);
    Ok(())
}
