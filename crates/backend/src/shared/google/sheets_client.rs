use async_trait::async_trait;
use serde::Deserialize;

use super::credentials::ServiceAccountCredentials;
use super::error::SheetsError;
use super::token::fetch_access_token;
use crate::shared::config::SheetsConfig;

/// Read access to one spreadsheet
///
/// `authorize` runs once per listing request, the returned token is shared
/// by the range reads of that request.
#[async_trait]
pub trait SpreadsheetSource: Send + Sync {
    async fn authorize(&self) -> Result<String, SheetsError>;

    /// Rows of `range`. A range with no data is an empty list, not an error.
    async fn read_range(&self, token: &str, range: &str) -> Result<Vec<Vec<String>>, SheetsError>;
}

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<serde_json::Value>>>,
}

/// HTTP-клиент Google Sheets API v4
pub struct GoogleSheetsClient {
    client: reqwest::Client,
    credentials: ServiceAccountCredentials,
    spreadsheet_id: String,
    api_base: String,
    token_uri: String,
}

impl GoogleSheetsClient {
    pub fn new(
        credentials: ServiceAccountCredentials,
        config: &SheetsConfig,
    ) -> Result<Self, SheetsError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            credentials,
            spreadsheet_id: config.spreadsheet_id.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token_uri: config.token_uri.clone(),
        })
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.api_base,
            urlencoding::encode(&self.spreadsheet_id),
            urlencoding::encode(range)
        )
    }
}

#[async_trait]
impl SpreadsheetSource for GoogleSheetsClient {
    async fn authorize(&self) -> Result<String, SheetsError> {
        fetch_access_token(&self.client, &self.credentials, &self.token_uri).await
    }

    async fn read_range(&self, token: &str, range: &str) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = self.values_url(range);
        tracing::debug!("Reading range {}", range);

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SheetsError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        parse_value_range(&body)
    }
}

fn parse_value_range(body: &str) -> Result<Vec<Vec<String>>, SheetsError> {
    let parsed: ValueRange =
        serde_json::from_str(body).map_err(|e| SheetsError::MalformedResponse(e.to_string()))?;

    Ok(parsed
        .values
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.into_iter().map(cell_to_string).collect())
        .collect())
}

/// Formatted values arrive as strings; anything else is stringified
fn cell_to_string(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
