//! Environment configuration.

const DEFAULT_SERVICE_NAME: &str = "Apex";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Shown in the closing summary header.
    pub service_name: String,
}

impl Default for AppConfig {
    fn default() -> Self { Self { service_name: DEFAULT_SERVICE_NAME.to_string() } }
}

impl AppConfig {
    /// Reads `APEX_SERVICE_NAME`. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let service_name = lookup("APEX_SERVICE_NAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        Self { service_name }
    }
}
