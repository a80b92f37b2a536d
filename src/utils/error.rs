use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExifMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("EXIF parsing failed: {0}")]
    Exif(#[from] exif::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed GPS metadata: {reason}")]
    MalformedGps { reason: String },

    #[error("{axis} {value} out of range [{min}, {max}]")]
    OutOfRange {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Template error: {message}")]
    Template { message: String },
}

pub type Result<T> = std::result::Result<T, ExifMapError>;
