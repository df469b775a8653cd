//! Presentation collaborator consumed by the selection flow.

use crate::error::Result;

/// Menu and prompt surface the flow drives.
///
/// Implementations render however they like; the flow only needs a
/// chosen index, a yes/no answer, and a way to show text verbatim.
/// Keeping this behind a trait makes the flow deterministic under test.
pub trait Prompter {
    /// Display a message to the user.
    fn show(&mut self, message: &str);

    /// Present a single-choice menu over `labels`.
    ///
    /// Returns the chosen index, or `None` when the user leaves the
    /// menu without selecting.
    fn select_one(&mut self, title: &str, labels: &[String]) -> Result<Option<usize>>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> Result<bool>;
}
