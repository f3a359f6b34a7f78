use anyhow::Result;
use inquire::InquireError;

use crate::shell::{Rejection, Severity};

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Message shown next to the spinner while waiting for the model.
pub const THINKING_MESSAGE: &str = "Llama 3 is thinking...";

/// Heading printed above every answer.
pub const ANSWER_HEADING: &str = "Answer:";

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Turns a cancelled prompt (Esc / Ctrl+C) into `None`.
///
/// Prints a newline so the terminal is left on a clean line.
pub fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_prompt_cancelled(&e) => {
            println!();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prints a rejection to stderr, as an error or a warning.
pub fn print_rejection(rejection: &Rejection) {
    let tag = match rejection.severity() {
        Severity::Error => Style::error("Error:"),
        Severity::Warning => Style::warning("Warning:"),
    };
    eprintln!("{tag} {rejection}");
}
