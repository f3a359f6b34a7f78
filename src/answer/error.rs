use thiserror::Error;

/// Failure of a single call to the inference service.
///
/// Callers treat every variant the same way; the split only exists so the
/// message shown to the user says what went wrong.
#[derive(Error, Debug)]
pub enum AskError {
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode the API response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("the API response did not contain any answer text")]
    MissingContent,
}
