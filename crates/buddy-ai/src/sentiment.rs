use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse mood read from a single message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Low,
    Excited,
    Neutral,
}

impl Sentiment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Excited => "excited",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords signalling a low mood. Checked first.
pub const LOW_KEYWORDS: &[&str] = &[
    "sad",
    "depressed",
    "down",
    "low",
    "tired",
    "exhausted",
    "overwhelmed",
    "stressed",
    "anxious",
    "frustrated",
];

/// Keywords signalling excitement. Checked after [`LOW_KEYWORDS`].
pub const EXCITED_KEYWORDS: &[&str] = &[
    "happy",
    "excited",
    "great",
    "amazing",
    "awesome",
    "wonderful",
    "fantastic",
    "excellent",
    "motivated",
];

/// Neutral keywords. Anything unmatched is already neutral, so these only
/// show up in [`matched_keyword`].
pub const NEUTRAL_KEYWORDS: &[&str] = &[
    "okay", "fine", "alright", "normal", "average", "decent", "so-so",
];

const KEYWORD_SETS: [(Sentiment, &[&str]); 3] = [
    (Sentiment::Low, LOW_KEYWORDS),
    (Sentiment::Excited, EXCITED_KEYWORDS),
    (Sentiment::Neutral, NEUTRAL_KEYWORDS),
];

/// Classify a message by case-insensitive substring match.
/// Priority: low > excited > neutral
#[must_use]
pub fn analyze_sentiment(message: &str) -> Sentiment {
    matched_keyword(message).map_or(Sentiment::Neutral, |(sentiment, _)| sentiment)
}

/// First keyword hit in priority order, with the set it belongs to
#[must_use]
pub fn matched_keyword(message: &str) -> Option<(Sentiment, &'static str)> {
    let lower = message.to_lowercase();
    KEYWORD_SETS.iter().find_map(|(sentiment, keywords)| {
        keywords
            .iter()
            .find(|kw| lower.contains(**kw))
            .map(|kw| (*sentiment, *kw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_keywords() {
        for kw in LOW_KEYWORDS {
            assert_eq!(analyze_sentiment(&format!("I feel {kw}")), Sentiment::Low, "{kw}");
        }
    }

    #[test]
    fn test_excited_keywords() {
        for kw in EXCITED_KEYWORDS {
            assert_eq!(
                analyze_sentiment(&format!("today was {kw}")),
                Sentiment::Excited,
                "{kw}"
            );
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(analyze_sentiment("I'm SO STRESSED"), Sentiment::Low);
        assert_eq!(analyze_sentiment("Feeling Fantastic"), Sentiment::Excited);
    }

    #[test]
    fn test_low_wins_over_excited() {
        assert_eq!(
            analyze_sentiment("I'm excited but also exhausted"),
            Sentiment::Low
        );
        assert_eq!(analyze_sentiment("happy yet sad"), Sentiment::Low);
    }

    #[test]
    fn test_no_keywords_is_neutral() {
        assert_eq!(analyze_sentiment("what are my goals"), Sentiment::Neutral);
        assert_eq!(analyze_sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn test_neutral_keyword_stays_neutral() {
        assert_eq!(analyze_sentiment("I'm doing okay"), Sentiment::Neutral);
        assert_eq!(
            matched_keyword("I'm doing okay"),
            Some((Sentiment::Neutral, "okay"))
        );
    }

    #[test]
    fn test_substring_match() {
        // "down" inside "download" still counts
        assert_eq!(analyze_sentiment("the download finished"), Sentiment::Low);
    }

    #[test]
    fn test_matched_keyword_reports_first_hit() {
        assert_eq!(
            matched_keyword("great, but tired"),
            Some((Sentiment::Low, "tired"))
        );
        assert_eq!(matched_keyword("nothing here"), None);
    }
}
