use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::credentials::ServiceAccountCredentials;
use super::error::SheetsError;

pub const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Claims of the signed assertion sent to the OAuth2 token endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Sign an RS256 assertion for the read-only spreadsheet scope
pub fn build_assertion(
    credentials: &ServiceAccountCredentials,
    token_uri: &str,
    now: DateTime<Utc>,
) -> Result<String, SheetsError> {
    let key = EncodingKey::from_rsa_pem(credentials.private_key().as_bytes())
        .map_err(|e| SheetsError::InvalidPrivateKey(e.to_string()))?;

    let iat = now.timestamp();
    let claims = AssertionClaims {
        iss: credentials.client_email().to_string(),
        scope: READONLY_SCOPE.to_string(),
        aud: token_uri.to_string(),
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
    };

    encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| SheetsError::InvalidPrivateKey(e.to_string()))
}

/// Exchange a fresh assertion for a bearer token
pub async fn fetch_access_token(
    client: &reqwest::Client,
    credentials: &ServiceAccountCredentials,
    token_uri: &str,
) -> Result<String, SheetsError> {
    let assertion = build_assertion(credentials, token_uri, Utc::now())?;

    let response = client
        .post(token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        tracing::error!("Token endpoint returned {}: {}", status, body);
        return Err(SheetsError::TokenExchange(format!(
            "status {}: {}",
            status.as_u16(),
            body
        )));
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| SheetsError::TokenExchange(format!("bad token response: {}", e)))?;
    Ok(token.access_token)
}
