use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ask")]
#[command(about = "Ask a question in one language, get the answer in another")]
#[command(version)]
pub struct Args {
    /// Question to answer (opens the interactive form if omitted on a terminal)
    pub question: Option<String>,

    /// Read the question from a file
    #[arg(long, conflicts_with = "question")]
    pub file: Option<String>,

    /// Language of the question (en, hi, mr or the full name)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Language for the answer (en, hi, mr or the full name)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Write a multi-line question in $EDITOR (interactive form only)
    #[arg(long)]
    pub editor: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported languages
    Languages,
    /// Show the resolved configuration
    Config,
}
