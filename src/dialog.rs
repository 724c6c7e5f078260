use anyhow::Result;

use crate::descriptor::ConnectionInfo;

/// Collects connection details from the user.
pub trait ConnectionDialog {
    /// Ask for a connection, pre-filled from `initial` when given.
    ///
    /// Returns `Ok(None)` when the user cancels.
    ///
    /// # Errors
    ///
    /// Returns an error if the dialog cannot talk to the user (I/O failure).
    fn show(&mut self, initial: Option<&ConnectionInfo>) -> Result<Option<ConnectionInfo>>;
}
