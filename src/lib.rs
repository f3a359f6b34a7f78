//! # ask - multilingual question answering CLI
//!
//! `ask` takes a question written in English, Hindi or Marathi and returns an
//! answer (not a translation) written in the language you pick, generated by
//! a Llama 3 model hosted on Groq.
//!
//! ## Quick Start
//!
//! ```bash
//! export GROQ_API_KEY="gsk_..."   # or put it in ./.env
//!
//! # Interactive form
//! ask
//!
//! # One-shot
//! ask --from en --to hi "What causes rain?"
//! cat question.txt | ask --to mr
//! ```
//!
//! ## Configuration
//!
//! Optional, read from `~/.config/ask/config.toml`:
//!
//! ```toml
//! [ask]
//! from = "en"
//! to = "hi"
//!
//! [service]
//! endpoint = "https://api.groq.com/openai"
//! model = "llama3-70b-8192"
//! api_key_env = "GROQ_API_KEY"
//! ```

/// Prompt composition, the inference client and answer extraction.
pub mod answer;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and process-wide settings.
pub mod config;

/// Question input from files and stdin.
pub mod input;

/// `tracing` subscriber setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Validation and orchestration of a single question.
pub mod shell;

/// Terminal UI components (spinner, colors).
pub mod ui;
