mod manager;

pub use manager::{
    AskConfig, ConfigFile, ConfigManager, Credential, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT,
    DEFAULT_MODEL, ResolveOptions, ServiceConfig, Settings, resolve_settings,
};
