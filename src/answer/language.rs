//! The fixed set of languages questions can be asked and answered in.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ui::Style;

/// A supported question/answer language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Hindi,
    Marathi,
}

/// Every supported language, in listing order.
pub const SUPPORTED_LANGUAGES: &[Language] = &[Language::English, Language::Hindi, Language::Marathi];

/// Order of the "Language of Your Question" selector.
pub const SOURCE_CHOICES: [Language; 3] = [Language::English, Language::Hindi, Language::Marathi];

/// Order of the "Language for the Answer" selector.
pub const TARGET_CHOICES: [Language; 3] = [Language::Hindi, Language::English, Language::Marathi];

impl Language {
    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Marathi => "mr",
        }
    }

    /// English display name, as substituted into the prompt.
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Marathi => "Marathi",
        }
    }

    /// Default language of the question (first source choice).
    pub const fn default_source() -> Self {
        SOURCE_CHOICES[0]
    }

    /// Default language of the answer (first target choice).
    pub const fn default_target() -> Self {
        TARGET_CHOICES[0]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A language outside the supported set was requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Unsupported language: '{0}'\n\n\
     Supported languages: en (English), hi (Hindi), mr (Marathi)\n\
     Run 'ask languages' to see the list."
)]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Accepts either the code (`hi`) or the name (`Hindi`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|lang| {
                lang.code().eq_ignore_ascii_case(wanted) || lang.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnsupportedLanguage(wanted.to_string()))
    }
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in SUPPORTED_LANGUAGES {
        println!("  {:3} {}", Style::code(lang.code()), Style::secondary(lang.name()));
    }
}
