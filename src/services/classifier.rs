//! Query intent classification.
//!
//! Classification is a strategy behind [`QueryClassifier`], so a smarter
//! classifier can replace the keyword matcher without touching the executor
//! or the store.

use crate::models::QueryIntent;

/// Maps free-text queries to an intent.
pub trait QueryClassifier: Send + Sync {
    fn classify(&self, query: &str) -> QueryIntent;
}

/// Keyword matcher with a fixed priority order.
///
/// Case-insensitive substring checks, first match wins:
/// "temperature" → Temperature, "salinity" → Salinity,
/// "float" or "location" → Location, anything else → General.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

/// Keyword rules in priority order.
const RULES: &[(&[&str], QueryIntent)] = &[
    (&["temperature"], QueryIntent::Temperature),
    (&["salinity"], QueryIntent::Salinity),
    (&["float", "location"], QueryIntent::Location),
];

impl QueryClassifier for KeywordClassifier {
    fn classify(&self, query: &str) -> QueryIntent {
        classify(query)
    }
}

/// Classify a query with the keyword rules.
pub fn classify(query: &str) -> QueryIntent {
    let query = query.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| query.contains(k)))
        .map(|&(_, intent)| intent)
        .unwrap_or(QueryIntent::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keywords() {
        assert_eq!(classify("average temperature"), QueryIntent::Temperature);
        assert_eq!(classify("What is the SALINITY here?"), QueryIntent::Salinity);
        assert_eq!(classify("find floats near equator"), QueryIntent::Location);
        assert_eq!(classify("show me a location"), QueryIntent::Location);
        assert_eq!(classify("hello there"), QueryIntent::General);
        assert_eq!(classify(""), QueryIntent::General);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            classify("Show temperature and salinity"),
            QueryIntent::Temperature
        );
        assert_eq!(
            classify("salinity at each float location"),
            QueryIntent::Salinity
        );
        assert_eq!(
            classify("float temperature readings"),
            QueryIntent::Temperature
        );
    }

    #[test]
    fn test_substring_matching() {
        // Containment, not word matching.
        assert_eq!(classify("floating point"), QueryIntent::Location);
        assert_eq!(classify("Temperatures by depth"), QueryIntent::Temperature);
    }

    #[test]
    fn test_strategy_object() {
        let classifier: &dyn QueryClassifier = &KeywordClassifier;
        assert_eq!(classifier.classify("Location of ARGO001"), QueryIntent::Location);
    }
}
