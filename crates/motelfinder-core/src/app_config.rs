use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Catalog file standing in for the remote listings store.
    pub listings_path: PathBuf,
    /// Optional cut-off applied after ranking; `None` returns every match.
    pub search_radius_km: Option<f64>,
    /// Country dialing prefix prepended to whatsapp handles, digits only.
    pub whatsapp_country_code: String,
}
