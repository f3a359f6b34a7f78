use serde::Serialize;

use super::Language;

pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are an expert multilingual assistant. \
     Your task is to understand a question provided in an {input_language} and generate \
     a comprehensive, detailed answer written exclusively in the {output_language}. \
     Do not simply translate the question; you must ANSWER it in the target language.";

/// Who a chat message is from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// The system instruction followed by the user's question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    system: Message,
    user: Message,
}

impl ComposedPrompt {
    pub const fn system(&self) -> &Message {
        &self.system
    }

    pub const fn user(&self) -> &Message {
        &self.user
    }

    /// Messages in the order they are sent.
    pub fn messages(&self) -> [&Message; 2] {
        [&self.system, &self.user]
    }
}

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(source: Language, target: Language) -> String {
    // {input_language}/{output_language} are placeholders for string replacement, not format arguments
    SYSTEM_PROMPT_TEMPLATE
        .replace("{input_language}", source.name())
        .replace("{output_language}", target.name())
}

/// Builds the prompt for one question. The question is passed through untouched.
pub fn compose(source: Language, target: Language, question: &str) -> ComposedPrompt {
    ComposedPrompt {
        system: Message {
            role: Role::System,
            content: build_system_prompt(source, target),
        },
        user: Message {
            role: Role::User,
            content: question.to_string(),
        },
    }
}
