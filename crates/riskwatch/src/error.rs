use riskwatch_core::auth::AuthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No access token stored; run `riskwatch login` first")]
    MissingToken,

    #[error("Access token cannot be empty")]
    EmptyToken,

    #[error("{0}")]
    FetchFailed(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Core(#[from] riskwatch_core::Error),
}
