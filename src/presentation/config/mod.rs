mod settings;

pub use settings::{
    GeminiSettings, LoggingSettings, ServerSettings, Settings, SettingsError,
};
