use thiserror::Error;

#[derive(Error, Debug)]
pub enum NailStudioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error(
        "API key is missing. Set generator.api_key in the config or the NAILSTUDIO_API_KEY / GEMINI_API_KEY environment variable."
    )]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No content generated")]
    NoContent,

    #[error("No image data found in response{}", .0.as_deref().map(|t| format!(" (model said: {t})")).unwrap_or_default())]
    NoImageData(Option<String>),

    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidChoice { field: &'static str, value: String },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, NailStudioError>;
