//! Positional layout of the tool sheet.
//!
//! Columns are read by position, never by header. The order of
//! [`ToolField::ORDER`] is the column order of the sheet (A..H) and also the
//! JSON key set of [`ToolRecord`](super::ToolRecord).

/// One column of the tool sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolField {
    Tool,
    Url,
    AddedBy,
    Date,
    Subject,
    Description,
    Capabilities,
    Rating,
}

impl ToolField {
    /// Column order of the sheet
    pub const ORDER: [ToolField; 8] = [
        ToolField::Tool,
        ToolField::Url,
        ToolField::AddedBy,
        ToolField::Date,
        ToolField::Subject,
        ToolField::Description,
        ToolField::Capabilities,
        ToolField::Rating,
    ];

    /// Number of columns a complete row carries
    pub const COUNT: usize = Self::ORDER.len();

    /// Field name as it appears in the JSON payload
    pub fn name(self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Url => "url",
            Self::AddedBy => "addedBy",
            Self::Date => "date",
            Self::Subject => "subject",
            Self::Description => "description",
            Self::Capabilities => "capabilities",
            Self::Rating => "rating",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_order() {
        assert_eq!(ToolField::COUNT, 8);
        assert_eq!(ToolField::ORDER[0], ToolField::Tool);
        assert_eq!(ToolField::ORDER[2], ToolField::AddedBy);
        assert_eq!(ToolField::ORDER[7], ToolField::Rating);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = ToolField::ORDER.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ToolField::COUNT);
    }
}
