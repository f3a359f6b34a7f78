mod client;
mod error;
mod extract;
mod language;
mod prompt;

pub use client::{Choice, GroqClient, InferenceClient, ModelResponse, ResponseMessage};
pub use error::AskError;
pub use extract::extract_text;
pub use language::{
    Language, SOURCE_CHOICES, SUPPORTED_LANGUAGES, TARGET_CHOICES, UnsupportedLanguage,
    print_languages,
};
pub use prompt::{ComposedPrompt, Message, Role, SYSTEM_PROMPT_TEMPLATE, compose};
