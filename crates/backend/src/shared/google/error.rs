use thiserror::Error;

/// Ошибки чтения таблицы
///
/// The `Display` text is what the API returns in the `error` field.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("Missing service account credential: {0}")]
    MissingCredential(&'static str),

    #[error("Invalid service account private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("Sheets API returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed Sheets API response: {0}")]
    MalformedResponse(String),
}
