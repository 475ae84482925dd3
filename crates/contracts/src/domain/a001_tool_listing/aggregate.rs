use serde::{Deserialize, Serialize};

use super::schema::ToolField;

// ============================================================================
// Tool record
// ============================================================================

/// Одна строка листа с инструментами
///
/// All fields are plain strings straight from the sheet. A short row leaves
/// its trailing fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    #[serde(default)]
    pub tool: String,

    #[serde(default)]
    pub url: String,

    #[serde(rename = "addedBy", default)]
    pub added_by: String,

    /// `dd-mm-yyyy`, may be empty or malformed
    #[serde(default)]
    pub date: String,

    /// Comma-separated tags
    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub capabilities: String,

    /// Empty, or `1`..`5`
    #[serde(default)]
    pub rating: String,
}

impl ToolRecord {
    /// Map a raw sheet row by position. Missing cells become empty strings,
    /// cells past the last column are ignored.
    pub fn from_row(row: &[String]) -> Self {
        let mut record = Self::default();
        for (field, cell) in ToolField::ORDER.iter().zip(row) {
            *record.field_mut(*field) = cell.clone();
        }
        record
    }

    /// Inverse of [`ToolRecord::from_row`], always `ToolField::COUNT` cells long
    pub fn to_row(&self) -> Vec<String> {
        ToolField::ORDER
            .iter()
            .map(|f| self.field(*f).to_string())
            .collect()
    }

    pub fn field(&self, field: ToolField) -> &str {
        match field {
            ToolField::Tool => &self.tool,
            ToolField::Url => &self.url,
            ToolField::AddedBy => &self.added_by,
            ToolField::Date => &self.date,
            ToolField::Subject => &self.subject,
            ToolField::Description => &self.description,
            ToolField::Capabilities => &self.capabilities,
            ToolField::Rating => &self.rating,
        }
    }

    fn field_mut(&mut self, field: ToolField) -> &mut String {
        match field {
            ToolField::Tool => &mut self.tool,
            ToolField::Url => &mut self.url,
            ToolField::AddedBy => &mut self.added_by,
            ToolField::Date => &mut self.date,
            ToolField::Subject => &mut self.subject,
            ToolField::Description => &mut self.description,
            ToolField::Capabilities => &mut self.capabilities,
            ToolField::Rating => &mut self.rating,
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Ответ `GET /api/tools`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub tools: Vec<ToolRecord>,

    #[serde(default)]
    pub subjects: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListingResponse {
    pub fn new(tools: Vec<ToolRecord>, subjects: Vec<String>) -> Self {
        Self {
            tools,
            subjects,
            error: None,
        }
    }

    /// No rows in the sheet. A success, not an error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Failed fetch: empty lists plus the error message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            tools: Vec::new(),
            subjects: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
