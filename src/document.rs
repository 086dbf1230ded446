use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two relevance values closer than this are considered equal when ranking.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Document represents a single ranked search hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i32,
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: i32, relevance: f64, rating: i32) -> Self {
        Self {
            id,
            relevance,
            rating,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

pub fn is_relevance_equal(left: f64, right: f64) -> bool {
    (left - right).abs() < RELEVANCE_EPSILON
}

/// Caller-defined lifecycle tag of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl DocumentStatus {
    /// Map the numeric code used by corpus files (0..=3).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(DocumentStatus::Actual),
            1 => Some(DocumentStatus::Irrelevant),
            2 => Some(DocumentStatus::Banned),
            3 => Some(DocumentStatus::Removed),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            DocumentStatus::Actual => 0,
            DocumentStatus::Irrelevant => 1,
            DocumentStatus::Banned => 2,
            DocumentStatus::Removed => 3,
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "actual" | "0" => Ok(DocumentStatus::Actual),
            "irrelevant" | "1" => Ok(DocumentStatus::Irrelevant),
            "banned" | "2" => Ok(DocumentStatus::Banned),
            "removed" | "3" => Ok(DocumentStatus::Removed),
            other => Err(format!("unknown document status '{}'", other)),
        }
    }
}

/// Per-document metadata kept by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Truncating integer mean of the ratings, 0 when there are none.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rating() {
        assert_eq!(compute_average_rating(&[1, 2, 3]), 2);
        assert_eq!(compute_average_rating(&[]), 0);
        assert_eq!(compute_average_rating(&[1, 2]), 1);
        // truncates toward zero, not down
        assert_eq!(compute_average_rating(&[-1, -2]), -1);
        assert_eq!(compute_average_rating(&[i32::MAX, i32::MAX]), i32::MAX);
    }

    #[test]
    fn test_relevance_equality() {
        assert!(is_relevance_equal(0.5, 0.5 + 1e-9));
        assert!(!is_relevance_equal(0.5, 0.5 + 2e-6));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("banned".parse::<DocumentStatus>(), Ok(DocumentStatus::Banned));
        assert_eq!("ACTUAL".parse::<DocumentStatus>(), Ok(DocumentStatus::Actual));
        assert_eq!("3".parse::<DocumentStatus>(), Ok(DocumentStatus::Removed));
        assert!("deleted".parse::<DocumentStatus>().is_err());
        assert_eq!(DocumentStatus::from_code(1), Some(DocumentStatus::Irrelevant));
        assert_eq!(DocumentStatus::from_code(4), None);
    }

    #[test]
    fn test_display() {
        let doc = Document::new(4, 0.25, 3);
        assert_eq!(doc.to_string(), "{ document_id = 4, relevance = 0.25, rating = 3 }");
        assert_eq!(DocumentStatus::Banned.to_string(), "2");
    }
}
