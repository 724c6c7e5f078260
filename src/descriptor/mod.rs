mod command_line;
mod info;
mod options;
mod uri;
mod validation;

pub use command_line::{CommandLine, CommandLineBuilder};
pub use info::{ConnectionInfo, ConnectionKind, LineEndingStyle, DEFAULT_MOSH_PORTS, DEFAULT_PORT};
pub use options::{
    decode_options, encode_option, percent_decode, percent_encode, SshOption, SshOptions,
    WellKnownOption,
};
pub use uri::{decode, encode, is_recognized_scheme, parse_mosh_ports};
pub use validation::{validate, ValidationVerdict};
