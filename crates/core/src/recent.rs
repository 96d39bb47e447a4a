//! Recent-search history.
//!
//! A short, most-recent-first list of distinct query strings. Recording a query
//! that is already present moves it to the front instead of duplicating it, and
//! the oldest entry falls off once the list is full.

/// Maximum number of recent searches retained.
pub const MAX_RECENT_SEARCHES: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list from stored entries. Blank entries and repeats are
    /// dropped (first occurrence wins) and the result is capped.
    pub fn from_stored<I>(stored: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut entries: Vec<String> = Vec::with_capacity(MAX_RECENT_SEARCHES);
        for entry in stored {
            if entries.len() == MAX_RECENT_SEARCHES {
                break;
            }
            if entry.trim().is_empty() || entries.contains(&entry) {
                continue;
            }
            entries.push(entry);
        }
        Self { entries }
    }

    /// Put `query` at the front, removing any earlier copy and evicting the
    /// oldest entry past [`MAX_RECENT_SEARCHES`].
    pub fn record(&mut self, query: &str) {
        self.entries.retain(|e| e != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_RECENT_SEARCHES);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a RecentSearches {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> RecentSearches {
        RecentSearches::from_stored(items.iter().map(|s| s.to_string()))
    }

    #[test]
    fn record_on_full_list_evicts_oldest() {
        let mut recent = list(&["A", "B", "C", "D", "E"]);
        recent.record("F");
        assert_eq!(recent.as_slice(), ["F", "A", "B", "C", "D"]);
    }

    #[test]
    fn record_existing_moves_to_front() {
        let mut recent = list(&["A", "B", "C"]);
        recent.record("B");
        assert_eq!(recent.as_slice(), ["B", "A", "C"]);
    }

    #[test]
    fn record_front_entry_is_stable() {
        let mut recent = list(&["A", "B"]);
        recent.record("A");
        assert_eq!(recent.as_slice(), ["A", "B"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut recent = list(&["kolye"]);
        recent.record("Kolye");
        assert_eq!(recent.as_slice(), ["Kolye", "kolye"]);
    }

    #[test]
    fn from_stored_drops_blanks_repeats_and_overflow() {
        let recent = list(&["A", "", "A", "  ", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(recent.as_slice(), ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn clear_empties_list() {
        let mut recent = list(&["A", "B"]);
        recent.clear();
        assert!(recent.is_empty());
        recent.clear();
        assert_eq!(recent.len(), 0);
    }
}
