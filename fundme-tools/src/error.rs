use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("explorer returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("verification rejected: {0}")]
    Rejected(String),

    #[error("request to explorer failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid explorer configuration: {0}")]
    Config(String),
}

impl VerifyError {
    /// Explorers report a repeat submission as an error; callers treat it as done.
    pub fn is_already_verified(&self) -> bool {
        self.to_string().to_lowercase().contains("already verified")
    }
}
