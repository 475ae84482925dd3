//! Rating column presentation.

pub const MAX_RATING: u8 = 5;

/// Options of the rating filter, best first: (value, label)
pub const RATING_OPTIONS: [(&str, &str); 5] = [
    ("5", "5 Sterren"),
    ("4", "4 Sterren"),
    ("3", "3 Sterren"),
    ("2", "2 Sterren"),
    ("1", "1 Ster"),
];

/// How a rating cell is shown on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingDisplay {
    /// Empty cell, the tool has not been tried yet
    Untested,
    Stars { filled: u8, empty: u8 },
}

impl RatingDisplay {
    /// A non-numeric cell shows zero filled stars; values above the maximum are capped.
    pub fn from_rating(rating: &str) -> Self {
        if rating.is_empty() {
            return Self::Untested;
        }
        let filled = rating
            .trim()
            .parse::<u8>()
            .map(|n| n.min(MAX_RATING))
            .unwrap_or(0);
        Self::Stars {
            filled,
            empty: MAX_RATING - filled,
        }
    }

    /// `★★★☆☆`, or `None` for an untested tool
    pub fn stars(&self) -> Option<String> {
        match *self {
            Self::Untested => None,
            Self::Stars { filled, empty } => Some(format!(
                "{}{}",
                "★".repeat(filled as usize),
                "☆".repeat(empty as usize)
            )),
        }
    }
}
