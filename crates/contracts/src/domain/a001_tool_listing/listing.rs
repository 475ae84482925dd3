//! Sorting and filtering of the tool listing.
//!
//! Everything here is a pure function of its inputs. The frontend calls these
//! after each change of the base list or one of the filters.

use std::cmp::Ordering;

use chrono::{NaiveDate, TimeDelta};

use super::aggregate::ToolRecord;

/// How many records the "latest additions" block shows
pub const LATEST_ADDITIONS: usize = 3;

/// Parsed value of the `date` column
///
/// `Invalid` orders below every valid date, so a descending sort puts
/// malformed dates after all others, even after the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SheetDate {
    Invalid,
    Valid(NaiveDate),
}

impl SheetDate {
    pub fn epoch() -> Self {
        Self::Valid(NaiveDate::default())
    }
}

/// Parse a `dd-mm-yyyy` cell.
///
/// Empty input is the epoch. Out-of-range day and month values roll over
/// into the next month or year (`32-01-2024` is 1 February), two-digit years
/// are read as 19xx. Anything non-numeric is [`SheetDate::Invalid`].
pub fn parse_sheet_date(value: &str) -> SheetDate {
    if value.is_empty() {
        return SheetDate::epoch();
    }

    let mut parts = value.split('-').map(parse_component);
    let (Some(Some(day)), Some(Some(month)), Some(Some(year))) =
        (parts.next(), parts.next(), parts.next())
    else {
        return SheetDate::Invalid;
    };

    calendar_date(year, month, day)
        .map(SheetDate::Valid)
        .unwrap_or(SheetDate::Invalid)
}

fn parse_component(part: &str) -> Option<i64> {
    let trimmed = part.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<i64>().ok()
}

/// Calendar date for (year, 1-based month, day) with overflow normalization
fn calendar_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let year = if (0..=99).contains(&year) {
        year + 1900
    } else {
        year
    };

    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let first_of_month = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;

    first_of_month.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// Newest first. Stable, so records with equal dates keep their sheet order.
pub fn compare_by_date_desc(a: &ToolRecord, b: &ToolRecord) -> Ordering {
    parse_sheet_date(&b.date).cmp(&parse_sheet_date(&a.date))
}

pub fn sort_by_date_desc(tools: &mut [ToolRecord]) {
    tools.sort_by(compare_by_date_desc);
}

pub fn sorted_by_date_desc(mut tools: Vec<ToolRecord>) -> Vec<ToolRecord> {
    sort_by_date_desc(&mut tools);
    tools
}

/// Trimmed tags of a `subject` cell, empty pieces dropped
pub fn subject_tags(subject: &str) -> Vec<&str> {
    subject
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Exact, case-sensitive tag match. An empty filter matches everything.
pub fn matches_subject(tool: &ToolRecord, subject_filter: &str) -> bool {
    subject_filter.is_empty()
        || tool
            .subject
            .split(',')
            .map(str::trim)
            .any(|s| s == subject_filter)
}

/// Exact string match, `"5"` does not match `"05"`. An empty filter matches everything.
pub fn matches_rating(tool: &ToolRecord, rating_filter: &str) -> bool {
    rating_filter.is_empty() || tool.rating == rating_filter
}

/// Records of `base` passing both filters, in base order
pub fn derive_view(
    base: &[ToolRecord],
    subject_filter: &str,
    rating_filter: &str,
) -> Vec<ToolRecord> {
    base.iter()
        .filter(|t| matches_subject(t, subject_filter))
        .filter(|t| matches_rating(t, rating_filter))
        .cloned()
        .collect()
}

/// Head of the sorted base list, filters do not apply
pub fn latest_additions(sorted: &[ToolRecord]) -> &[ToolRecord] {
    &sorted[..sorted.len().min(LATEST_ADDITIONS)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> SheetDate {
        SheetDate::Valid(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn dated(name: &str, date: &str) -> ToolRecord {
        ToolRecord {
            tool: name.into(),
            date: date.into(),
            ..Default::default()
        }
    }

    fn tagged(name: &str, subject: &str, rating: &str) -> ToolRecord {
        ToolRecord {
            tool: name.into(),
            subject: subject.into(),
            rating: rating.into(),
            ..Default::default()
        }
    }

    fn names(tools: &[ToolRecord]) -> Vec<&str> {
        tools.iter().map(|t| t.tool.as_str()).collect()
    }

    #[test]
    fn test_parse_regular_date() {
        assert_eq!(parse_sheet_date("05-03-2024"), ymd(2024, 3, 5));
        assert_eq!(parse_sheet_date("31-12-2023"), ymd(2023, 12, 31));
    }

    #[test]
    fn test_parse_empty_is_epoch() {
        assert_eq!(parse_sheet_date(""), ymd(1970, 1, 1));
        assert_eq!(parse_sheet_date(""), SheetDate::epoch());
    }

    #[test]
    fn test_parse_malformed_is_invalid() {
        assert_eq!(parse_sheet_date("x-y-z"), SheetDate::Invalid);
        assert_eq!(parse_sheet_date("05-03"), SheetDate::Invalid);
        assert_eq!(parse_sheet_date("2024/03/05"), SheetDate::Invalid);
        assert_eq!(parse_sheet_date("   "), SheetDate::Invalid);
        assert_eq!(parse_sheet_date("1-1-99999999999999999999"), SheetDate::Invalid);
    }

    #[test]
    fn test_parse_rolls_over_like_a_calendar() {
        assert_eq!(parse_sheet_date("32-01-2024"), ymd(2024, 2, 1));
        assert_eq!(parse_sheet_date("01-13-2023"), ymd(2024, 1, 1));
        assert_eq!(parse_sheet_date("29-02-2023"), ymd(2023, 3, 1));
        assert_eq!(parse_sheet_date("00-03-2024"), ymd(2024, 2, 29));
    }

    #[test]
    fn test_parse_lenient_components() {
        assert_eq!(parse_sheet_date(" 5 - 3 - 2024 "), ymd(2024, 3, 5));
        assert_eq!(parse_sheet_date("01-01-24"), ymd(1924, 1, 1));
        assert_eq!(parse_sheet_date("05-03-2024-extra"), ymd(2024, 3, 5));
    }

    #[test]
    fn test_sort_descending() {
        let mut tools = vec![
            dated("a", "01-01-2020"),
            dated("b", "31-12-2023"),
            dated("c", "15-06-2022"),
        ];
        sort_by_date_desc(&mut tools);
        let dates: Vec<&str> = tools.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["31-12-2023", "15-06-2022", "01-01-2020"]);
    }

    #[test]
    fn test_sort_puts_empty_and_invalid_last() {
        let tools = vec![
            dated("bad1", "x-y-z"),
            dated("empty", ""),
            dated("old", "01-01-1999"),
            dated("bad2", "soon"),
            dated("new", "01-01-2024"),
        ];
        let sorted = sorted_by_date_desc(tools);
        assert_eq!(names(&sorted), vec!["new", "old", "empty", "bad1", "bad2"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let tools = vec![
            dated("first", "01-02-2024"),
            dated("second", "01-02-2024"),
            dated("third", "01-02-2024"),
        ];
        let sorted = sorted_by_date_desc(tools);
        assert_eq!(names(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_subject_filter_is_exact_after_trim() {
        let tool = tagged("t", "AI, Productivity", "");
        assert!(matches_subject(&tool, "Productivity"));
        assert!(matches_subject(&tool, "AI"));
        assert!(!matches_subject(&tool, "productivity"));
        assert!(!matches_subject(&tool, "Product"));
        assert!(matches_subject(&tool, ""));
    }

    #[test]
    fn test_rating_filter_is_exact_string() {
        let tool = tagged("t", "", "5");
        assert!(matches_rating(&tool, "5"));
        assert!(!matches_rating(&tool, "05"));
        assert!(!matches_rating(&tool, "4"));
        assert!(matches_rating(&tool, ""));

        let unrated = tagged("u", "", "");
        assert!(!matches_rating(&unrated, "5"));
    }

    #[test]
    fn test_derive_view_combines_filters() {
        let base = vec![
            tagged("a", "AI, Writing", "5"),
            tagged("b", "Writing", "4"),
            tagged("c", "AI", "4"),
            tagged("d", "", ""),
        ];

        assert_eq!(names(&derive_view(&base, "", "")), vec!["a", "b", "c", "d"]);
        assert_eq!(names(&derive_view(&base, "AI", "")), vec!["a", "c"]);
        assert_eq!(names(&derive_view(&base, "", "4")), vec!["b", "c"]);
        assert_eq!(names(&derive_view(&base, "Writing", "4")), vec!["b"]);
        assert!(derive_view(&base, "Video", "").is_empty());
    }

    #[test]
    fn test_latest_additions_ignores_filters() {
        let sorted = sorted_by_date_desc(vec![
            dated("a", "01-01-2020"),
            dated("b", "01-01-2024"),
            dated("c", "01-01-2023"),
            dated("d", "01-01-2022"),
        ]);
        assert_eq!(names(latest_additions(&sorted)), vec!["b", "c", "d"]);

        let short = vec![dated("only", "")];
        assert_eq!(latest_additions(&short).len(), 1);
        assert!(latest_additions(&[]).is_empty());
    }

    #[test]
    fn test_subject_tags() {
        assert_eq!(subject_tags(" AI ,Productivity,, "), vec!["AI", "Productivity"]);
        assert!(subject_tags("").is_empty());
    }
}
