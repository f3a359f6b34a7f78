use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::answer::Language;
use crate::paths;

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Secret token for the inference service.
///
/// `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a key, treating an empty or blank value as absent.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// Reads the key from the named environment variable.
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var).ok().and_then(Self::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Default settings in the `[ask]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskConfig {
    /// Default language of the question (code or name).
    pub from: Option<String>,
    /// Default language of the answer (code or name).
    pub to: Option<String>,
}

/// The `[service]` section: where and how to reach the model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    /// Model identifier sent with every request.
    pub model: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/ask/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub ask: AskConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Process-wide settings, resolved once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
    pub model: String,
    /// Name of the variable the credential is read from, used in messages.
    pub api_key_env: String,
    pub credential: Option<Credential>,
    pub default_source: Language,
    pub default_target: Language,
}

/// Language overrides given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Merges CLI options with the config file and the built-in defaults.
///
/// CLI options take precedence over config file values. The credential is
/// looked up in the environment here and nowhere else; a missing credential
/// is not an error at this point.
///
/// # Errors
///
/// Returns an error if a language in the CLI options or config file is not supported.
pub fn resolve_settings(options: &ResolveOptions, config_file: &ConfigFile) -> Result<Settings> {
    let default_source = resolve_language(
        options.from.as_deref(),
        config_file.ask.from.as_deref(),
        Language::default_source(),
    )?;
    let default_target = resolve_language(
        options.to.as_deref(),
        config_file.ask.to.as_deref(),
        Language::default_target(),
    )?;

    let service = &config_file.service;
    let api_key_env = service
        .api_key_env
        .clone()
        .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
    let credential = Credential::from_env(&api_key_env);

    Ok(Settings {
        endpoint: service
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        model: service
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        api_key_env,
        credential,
        default_source,
        default_target,
    })
}

fn resolve_language(cli: Option<&str>, file: Option<&str>, fallback: Language) -> Result<Language> {
    Ok(cli.or(file).map(str::parse::<Language>).transpose()?.unwrap_or(fallback))
}

/// Loads the configuration file. Nothing is ever written back.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/ask/config.toml`
    /// or `~/.config/ask/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn with_path(config_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the file if it exists, falling back to defaults when it does not.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            Ok(ConfigFile::default())
        }
    }
}
