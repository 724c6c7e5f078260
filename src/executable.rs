use std::path::{Path, PathBuf};

#[cfg(windows)]
pub const MOSH_EXECUTABLE: &str = "mosh.exe";
#[cfg(not(windows))]
pub const MOSH_EXECUTABLE: &str = "mosh";

/// Client executables a command line can launch.
///
/// Computed once and handed to [`crate::descriptor::CommandLineBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executables {
    pub ssh: PathBuf,
    pub mosh: PathBuf,
}

impl Executables {
    /// Locate the clients for the running platform. Paths are composed, not
    /// checked for existence.
    #[must_use]
    pub fn detect() -> Self {
        let executables = Self {
            ssh: local_ssh_client_path(),
            mosh: PathBuf::from(MOSH_EXECUTABLE),
        };
        tracing::debug!(
            ssh = %executables.ssh.display(),
            mosh = %executables.mosh.display(),
            "detected client executables"
        );
        executables
    }

    /// Replace detected paths with explicit ones where given.
    #[must_use]
    pub fn with_overrides(mut self, ssh: Option<&Path>, mosh: Option<&Path>) -> Self {
        if let Some(ssh) = ssh {
            self.ssh = ssh.to_path_buf();
        }
        if let Some(mosh) = mosh {
            self.mosh = mosh.to_path_buf();
        }
        self
    }
}

#[cfg(windows)]
fn local_ssh_client_path() -> PathBuf {
    let system_root = std::env::var("SystemRoot").ok();
    // A 32-bit process on 64-bit Windows sees the 32-bit System32
    let redirected = cfg!(target_pointer_width = "32")
        && std::env::var_os("PROCESSOR_ARCHITEW6432").is_some();
    windows_ssh_path(system_root.as_deref(), redirected)
}

#[cfg(not(windows))]
fn local_ssh_client_path() -> PathBuf {
    PathBuf::from("ssh")
}

/// Path of the bundled OpenSSH client under the Windows system root.
///
/// `redirected` selects `Sysnative`, the alias a WOW64 process uses to reach
/// the native `System32`.
#[must_use]
pub fn windows_ssh_path(system_root: Option<&str>, redirected: bool) -> PathBuf {
    let system_dir = if redirected { "Sysnative" } else { "System32" };
    let mut path = PathBuf::from(system_root.unwrap_or(r"C:\Windows"));
    path.push(system_dir);
    path.push("OpenSSH");
    path.push("ssh.exe");
    path
}
