use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::process;

use ask_cli::answer::{UnsupportedLanguage, print_languages};
use ask_cli::cli::commands::{ask, config, form, load_settings};
use ask_cli::cli::{Args, Command};
use ask_cli::config::ResolveOptions;
use ask_cli::shell::Rejection;
use ask_cli::ui::{self, Style};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        process::exit(report(&err));
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    // A missing .env is fine; the credential check happens per question.
    let dotenv = dotenvy::dotenv();
    ask_cli::logging::init(args.verbose);
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    if let Some(Command::Languages) = args.command {
        print_languages();
        return Ok(());
    }

    let settings = load_settings(&ResolveOptions {
        from: args.from,
        to: args.to,
    })?;

    match args.command {
        Some(Command::Config) => config::print_config(&settings),
        Some(Command::Languages) => Ok(()),
        None => {
            let interactive = args.question.is_none()
                && args.file.is_none()
                && std::io::stdin().is_terminal();

            if interactive {
                form::run_form(&settings, args.editor).await
            } else {
                let options = ask::AskOptions {
                    question: args.question,
                    file: args.file,
                };
                ask::run_ask(&settings, options).await
            }
        }
    }
}

/// Prints the error and picks the exit code.
fn report(err: &anyhow::Error) -> i32 {
    if let Some(rejection) = err.downcast_ref::<Rejection>() {
        ui::print_rejection(rejection);
        return rejection.exit_code();
    }

    if err.downcast_ref::<UnsupportedLanguage>().is_some() {
        eprintln!("{} {err}", Style::error("Error:"));
        return exitcode::USAGE;
    }

    eprintln!("{} {err:#}", Style::error("Error:"));
    exitcode::SOFTWARE
}
