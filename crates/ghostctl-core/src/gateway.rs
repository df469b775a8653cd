//! External collaborator boundary.

use crate::error::Result;

/// Executes an external command line and returns its captured output.
///
/// Implementations return captured stdout on success. When the command
/// itself reports an error, the captured error text is returned as a
/// normal string result; only a command that cannot be started at all
/// fails, with [`Error::Execution`](crate::Error::Execution). The core
/// never inspects exit codes: branching is driven by text content alone.
///
/// One call is in flight at a time; there is no timeout and no retry.
pub trait CommandGateway {
    /// Run the given argv and capture its output.
    fn execute(&self, argv: &[String]) -> Result<String>;
}

impl<G: CommandGateway + ?Sized> CommandGateway for &G {
    fn execute(&self, argv: &[String]) -> Result<String> {
        (**self).execute(argv)
    }
}
