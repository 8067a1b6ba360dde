//! Category autocomplete ranked by search frequency

use shared::CategoryKey;

/// Ranks previously searched categories for a query
#[derive(Debug, Clone)]
pub struct SuggestionRanker {
    limit: usize,
}

impl SuggestionRanker {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Categories containing `query` (case-insensitive), most searched first,
    /// ties broken lexicographically. Blank queries yield nothing.
    ///
    /// Whitespace only decides blankness; a non-blank query is matched as typed.
    pub fn rank(&self, query: &str, frequencies: &[(CategoryKey, u64)]) -> Vec<String> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let query = query.to_lowercase();

        let mut matches: Vec<(&str, u64)> = frequencies
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .filter(|(category, _)| category.contains(query.as_str()))
            .collect();

        matches.sort_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)));

        matches
            .into_iter()
            .take(self.limit)
            .map(|(category, _)| category.to_string())
            .collect()
    }
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self::new(5)
    }
}
