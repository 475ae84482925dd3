use std::fmt;

use super::error::SheetsError;

pub const CLIENT_EMAIL_VAR: &str = "GOOGLE_CLIENT_EMAIL";
pub const PRIVATE_KEY_VAR: &str = "GOOGLE_PRIVATE_KEY";

/// Service account identity used to sign token requests
///
/// Built once at startup. Both values are required; the key is stored with
/// its `\n` escapes already turned into real newlines.
#[derive(Clone)]
pub struct ServiceAccountCredentials {
    client_email: String,
    private_key: String,
}

impl ServiceAccountCredentials {
    pub fn new(
        client_email: Option<String>,
        private_key: Option<String>,
    ) -> Result<Self, SheetsError> {
        let client_email = client_email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or(SheetsError::MissingCredential(CLIENT_EMAIL_VAR))?;

        let private_key = private_key
            .filter(|k| !k.trim().is_empty())
            .map(|k| unescape_newlines(&k))
            .ok_or(SheetsError::MissingCredential(PRIVATE_KEY_VAR))?;

        Ok(Self {
            client_email,
            private_key,
        })
    }

    /// Read `GOOGLE_CLIENT_EMAIL` and `GOOGLE_PRIVATE_KEY`
    pub fn from_env() -> Result<Self, SheetsError> {
        Self::new(
            std::env::var(CLIENT_EMAIL_VAR).ok(),
            std::env::var(PRIVATE_KEY_VAR).ok(),
        )
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// PEM text of the RSA key
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for ServiceAccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountCredentials")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Environment variables carry the PEM on one line with literal `\n`
pub fn unescape_newlines(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
