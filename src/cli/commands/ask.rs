use anyhow::Result;
use std::io::IsTerminal;

use crate::answer::GroqClient;
use crate::config::Settings;
use crate::input::InputReader;
use crate::shell::{Outcome, Request, Shell};
use crate::ui::{ANSWER_HEADING, Spinner, Style, THINKING_MESSAGE};

pub struct AskOptions {
    pub question: Option<String>,
    pub file: Option<String>,
}

/// Answers a single question and exits.
///
/// The answer goes to stdout on its own; the heading and spinner go to stderr.
/// A rejection is returned as the error so the caller can pick the exit code.
pub async fn run_ask(settings: &Settings, options: AskOptions) -> Result<()> {
    let question = match options.question {
        Some(question) => question,
        None => InputReader::read(options.file.as_deref())?,
    };

    let client = GroqClient::new(settings.endpoint.clone(), settings.model.clone());
    let shell = Shell::new(settings, client);
    let request = Request::new(settings.default_source, settings.default_target, question);

    let outcome = {
        let _spinner = std::io::stderr()
            .is_terminal()
            .then(|| Spinner::new(THINKING_MESSAGE));
        shell.submit(&request).await
    };

    match outcome {
        Outcome::Answered(text) => {
            eprintln!("{}", Style::header(ANSWER_HEADING));
            println!("{text}");
            Ok(())
        }
        Outcome::Rejected(rejection) => Err(rejection.into()),
    }
}
