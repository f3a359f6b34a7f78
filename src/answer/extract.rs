use super::{AskError, ModelResponse};

/// Pulls the answer text out of a model response.
///
/// The first choice's content is returned exactly as sent. A response with no
/// choices, or whose content is absent, is an error rather than an empty answer.
pub fn extract_text(response: ModelResponse) -> Result<String, AskError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(AskError::MissingContent)
}
