//! The interactive form: two language selectors, a question box and a submit.

use anyhow::Result;
use inquire::{Confirm, Editor, InquireError, Select, Text};

use crate::answer::{GroqClient, Language, SOURCE_CHOICES, TARGET_CHOICES};
use crate::config::Settings;
use crate::shell::{Outcome, Phase, Request, Shell};
use crate::ui::{self, ANSWER_HEADING, Spinner, Style, THINKING_MESSAGE, cancellable};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current field values. Kept between questions, nothing else is.
#[derive(Debug, Clone, Copy)]
struct Selection {
    source: Language,
    target: Language,
}

pub async fn run_form(settings: &Settings, use_editor: bool) -> Result<()> {
    print_header(settings);

    let client = GroqClient::new(settings.endpoint.clone(), settings.model.clone());
    let shell = Shell::new(settings, client);
    let mut selection = Selection {
        source: settings.default_source,
        target: settings.default_target,
    };

    loop {
        tracing::debug!(phase = ?Phase::Idle, "waiting for a question");

        let Some(request) = cancellable(read_request(&mut selection, use_editor))? else {
            break;
        };

        let outcome = {
            let _spinner = Spinner::new(THINKING_MESSAGE);
            shell.submit(&request).await
        };

        match outcome {
            Outcome::Answered(text) => {
                println!();
                println!("{}", Style::header(ANSWER_HEADING));
                println!("{text}");
                println!();
            }
            Outcome::Rejected(rejection) => {
                ui::print_rejection(&rejection);
                eprintln!();
            }
        }

        let again = Confirm::new("Ask another question?")
            .with_default(true)
            .prompt();
        if !cancellable(again)?.unwrap_or(false) {
            break;
        }
    }

    Ok(())
}

fn read_request(selection: &mut Selection, use_editor: bool) -> Result<Request, InquireError> {
    selection.source = select_language(
        "Language of Your Question",
        &SOURCE_CHOICES,
        selection.source,
    )?;
    selection.target = select_language(
        "Language for the Answer",
        &TARGET_CHOICES,
        selection.target,
    )?;

    let question = if use_editor {
        Editor::new("Enter your question here:")
            .with_help_message("Save and close the editor to submit")
            .prompt()?
    } else {
        Text::new("Enter your question here:")
            .with_help_message("Enter to generate the answer, Esc to quit (run with --editor for multi-line questions)")
            .prompt()?
    };

    Ok(Request::new(selection.source, selection.target, question))
}

fn select_language(
    message: &str,
    choices: &[Language],
    current: Language,
) -> Result<Language, InquireError> {
    let cursor = choices.iter().position(|l| *l == current).unwrap_or(0);
    Select::new(message, choices.to_vec())
        .with_starting_cursor(cursor)
        .prompt()
}

fn print_header(settings: &Settings) {
    println!(
        "{} {} - Multilingual Conversational Assistant",
        Style::header("ask"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::secondary(format!("Powered by {} on Groq", settings.model))
    );
    println!();
}
