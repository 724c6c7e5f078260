//! Codec for `ssh://` and `mosh://` connection descriptors.
//!
//! [`descriptor::decode`] turns a descriptor URI into a [`descriptor::ConnectionInfo`],
//! [`descriptor::encode`] turns it back, and [`descriptor::CommandLineBuilder`]
//! renders the `ssh`/`mosh` invocation for it.

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod dialog;
pub mod error;
pub mod executable;
