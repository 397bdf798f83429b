use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read listings file {path}: {source}")]
    ListingsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse listings YAML: {0}")]
    ListingsFileParse(#[from] serde_yaml::Error),

    #[error("failed to parse listings JSON: {0}")]
    ListingsFileJson(#[from] serde_json::Error),

    #[error("unsupported listings file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("listings validation failed: {0}")]
    Validation(String),
}
