const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    /// Reads settings from the process environment. The provider API key is
    /// the only required value; everything else has a default.
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(SettingsError::MissingApiKey)?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            gemini: GeminiSettings {
                api_key,
                model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            },
            logging: LoggingSettings {
                json_format: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("invalid SERVER_PORT value: {0}")]
    InvalidPort(String),
}
