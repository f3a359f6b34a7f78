//! One question, start to finish: validate, compose, call, extract.
//!
//! The shell owns no terminal I/O. Front ends build a [`Request`], hand it to
//! [`Shell::submit`], and render the [`Outcome`].

use std::fmt;

use crate::answer::{AskError, InferenceClient, Language, compose, extract_text};
use crate::config::Settings;

/// A single question to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub source: Language,
    pub target: Language,
    pub question: String,
}

impl Request {
    pub fn new(source: Language, target: Language, question: impl Into<String>) -> Self {
        Self {
            source,
            target,
            question: question.into(),
        }
    }
}

/// Where a submission is in its cycle. Logged at each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Calling,
    Displaying,
    Rejected,
}

/// How loudly a rejection should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Why a submission produced no answer.
#[derive(Debug)]
pub enum Rejection {
    /// The API key variable is unset or blank.
    MissingCredential { env_var: String },
    /// The question is empty or whitespace only.
    EmptyQuestion,
    /// The call went out but no answer came back.
    ServiceFailed(AskError),
}

impl Rejection {
    pub const fn severity(&self) -> Severity {
        match self {
            Self::EmptyQuestion => Severity::Warning,
            Self::MissingCredential { .. } | Self::ServiceFailed(_) => Severity::Error,
        }
    }

    /// Process exit code for one-shot runs.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingCredential { .. } => exitcode::CONFIG,
            Self::EmptyQuestion => exitcode::DATAERR,
            Self::ServiceFailed(_) => exitcode::UNAVAILABLE,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential { env_var } => write!(
                f,
                "{env_var} is not set. Please add it to your .env file."
            ),
            Self::EmptyQuestion => f.write_str("Please enter a question first."),
            Self::ServiceFailed(err) => {
                write!(f, "The assistant service failed to respond: {err}")
            }
        }
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ServiceFailed(err) => Some(err),
            _ => None,
        }
    }
}

/// Result of one submission.
#[derive(Debug)]
pub enum Outcome {
    /// The extracted answer text, unmodified.
    Answered(String),
    Rejected(Rejection),
}

/// Runs submissions against an inference client using process-wide settings.
pub struct Shell<'a, C> {
    settings: &'a Settings,
    client: C,
}

impl<'a, C: InferenceClient> Shell<'a, C> {
    pub const fn new(settings: &'a Settings, client: C) -> Self {
        Self { settings, client }
    }

    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Handles one submit action.
    ///
    /// The credential is checked before the question, and neither failure
    /// reaches the client. Each call is independent of every other.
    pub async fn submit(&self, request: &Request) -> Outcome {
        enter(Phase::Validating);

        let Some(credential) = self.settings.credential.as_ref() else {
            return reject(Rejection::MissingCredential {
                env_var: self.settings.api_key_env.clone(),
            });
        };

        if request.question.trim().is_empty() {
            return reject(Rejection::EmptyQuestion);
        }

        enter(Phase::Calling);
        let prompt = compose(request.source, request.target, &request.question);

        let answer = self
            .client
            .complete(credential, &prompt)
            .await
            .and_then(extract_text);

        match answer {
            Ok(text) => {
                enter(Phase::Displaying);
                Outcome::Answered(text)
            }
            Err(err) => {
                tracing::debug!(error = %err, "inference call failed");
                reject(Rejection::ServiceFailed(err))
            }
        }
    }
}

fn enter(phase: Phase) {
    tracing::debug!(?phase, "submission phase");
}

fn reject(rejection: Rejection) -> Outcome {
    enter(Phase::Rejected);
    Outcome::Rejected(rejection)
}
