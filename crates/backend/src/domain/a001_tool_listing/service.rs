use std::collections::HashSet;
use std::sync::Arc;

use contracts::domain::a001_tool_listing::{ListingResponse, ToolRecord};

use crate::shared::config::SheetsConfig;
use crate::shared::google::{
    GoogleSheetsClient, ServiceAccountCredentials, SheetsError, SpreadsheetSource,
};

/// Read-only gateway: two ranges of one spreadsheet in, one listing out
pub struct SheetGateway {
    source: Arc<dyn SpreadsheetSource>,
    tools_range: String,
    subjects_range: String,
}

impl SheetGateway {
    pub fn new(source: Arc<dyn SpreadsheetSource>, config: &SheetsConfig) -> Self {
        Self {
            source,
            tools_range: config.tools_range.clone(),
            subjects_range: config.subjects_range.clone(),
        }
    }

    /// Authenticate, read both ranges, normalize.
    ///
    /// Both reads must succeed. When the tool range is empty the subjects are
    /// not used and the listing is empty.
    pub async fn fetch_listing(&self) -> Result<ListingResponse, SheetsError> {
        let token = self.source.authorize().await?;

        let (tool_rows, subject_rows) = tokio::try_join!(
            self.source.read_range(&token, &self.tools_range),
            self.source.read_range(&token, &self.subjects_range),
        )?;

        if tool_rows.is_empty() {
            tracing::debug!("Range {} has no rows", self.tools_range);
            return Ok(ListingResponse::empty());
        }

        let tools = map_tool_rows(&tool_rows);
        let subjects = extract_subjects(subject_rows);
        tracing::debug!(
            "Listing built: {} tools, {} subjects",
            tools.len(),
            subjects.len()
        );

        Ok(ListingResponse::new(tools, subjects))
    }
}

pub fn map_tool_rows(rows: &[Vec<String>]) -> Vec<ToolRecord> {
    rows.iter().map(|row| ToolRecord::from_row(row)).collect()
}

/// Flatten the subject range, drop empty cells, keep the first occurrence of each value
pub fn extract_subjects(rows: Vec<Vec<String>>) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Handler state for `/api/tools`
///
/// Holds either a ready gateway or the reason it could not be built at
/// startup. In the second case every request answers with that error.
#[derive(Clone)]
pub struct ListingState {
    gateway: Arc<Result<SheetGateway, SheetsError>>,
}

impl ListingState {
    pub fn ready(gateway: SheetGateway) -> Self {
        Self {
            gateway: Arc::new(Ok(gateway)),
        }
    }

    pub fn unavailable(error: SheetsError) -> Self {
        Self {
            gateway: Arc::new(Err(error)),
        }
    }

    /// Build the Google-backed gateway from the config and the credentials
    /// found in the environment
    pub fn from_config(config: &SheetsConfig) -> Self {
        let built = ServiceAccountCredentials::from_env()
            .and_then(|creds| GoogleSheetsClient::new(creds, config))
            .map(|client| SheetGateway::new(Arc::new(client), config));

        match built {
            Ok(gateway) => {
                tracing::info!(
                    "Sheet gateway ready for spreadsheet {}",
                    config.spreadsheet_id
                );
                Self::ready(gateway)
            }
            Err(e) => {
                tracing::error!("Sheet gateway unavailable: {}", e);
                Self::unavailable(e)
            }
        }
    }

    pub async fn fetch_listing(&self) -> Result<ListingResponse, String> {
        match self.gateway.as_ref() {
            Ok(gateway) => gateway.fetch_listing().await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Spreadsheet kept in memory, keyed by range
    #[derive(Default)]
    pub struct InMemorySheet {
        pub ranges: Vec<(String, Vec<Vec<String>>)>,
        pub auth_error: Option<String>,
        pub failing_range: Option<String>,
        pub reads: Mutex<Vec<String>>,
    }

    impl InMemorySheet {
        pub fn with_range(mut self, range: &str, rows: &[&[&str]]) -> Self {
            let rows = rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect();
            self.ranges.push((range.to_string(), rows));
            self
        }
    }

    #[async_trait]
    impl SpreadsheetSource for InMemorySheet {
        async fn authorize(&self) -> Result<String, SheetsError> {
            match &self.auth_error {
                Some(msg) => Err(SheetsError::TokenExchange(msg.clone())),
                None => Ok("test-token".to_string()),
            }
        }

        async fn read_range(
            &self,
            token: &str,
            range: &str,
        ) -> Result<Vec<Vec<String>>, SheetsError> {
            assert_eq!(token, "test-token");
            self.reads.lock().unwrap().push(range.to_string());
            if self.failing_range.as_deref() == Some(range) {
                return Err(SheetsError::UpstreamStatus {
                    status: 503,
                    body: "unavailable".into(),
                });
            }
            Ok(self
                .ranges
                .iter()
                .find(|(r, _)| r == range)
                .map(|(_, rows)| rows.clone())
                .unwrap_or_default())
        }
    }

    pub fn sheets_config() -> SheetsConfig {
        SheetsConfig {
            spreadsheet_id: "sheet-1".into(),
            tools_range: "Blad1!A2:H".into(),
            subjects_range: "Blad2!A2:A".into(),
            api_base: "https://sheets.googleapis.com".into(),
            token_uri: "https://oauth2.googleapis.com/token".into(),
        }
    }

    pub fn gateway(sheet: InMemorySheet) -> (SheetGateway, Arc<InMemorySheet>) {
        let sheet = Arc::new(sheet);
        let gateway = SheetGateway::new(sheet.clone(), &sheets_config());
        (gateway, sheet)
    }
}
