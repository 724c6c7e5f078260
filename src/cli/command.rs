use anyhow::{bail, Result};

use crate::config::Settings;
use crate::descriptor::{self, validate};

pub fn run(uri: &str, settings: &Settings) -> Result<()> {
    if !descriptor::is_recognized_scheme(uri) {
        bail!("Not an ssh:// or mosh:// URI: {uri}");
    }

    let mut info = descriptor::decode(uri)?;
    info.line_ending = settings.line_ending;

    let verdict = validate(&info);
    if !verdict.is_valid() {
        bail!("Invalid connection: {verdict}");
    }

    println!("{}", settings.command_line_builder().build(&info));
    Ok(())
}
