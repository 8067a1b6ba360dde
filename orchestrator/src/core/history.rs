//! Per-category name history and search frequency tracking
//!
//! This module owns the only shared mutable state of the engine: the bounded
//! history of names already returned for each category, and the number of
//! times each category was requested. Identity is always the lowercased name.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use shared::{CategoryKey, NameCandidate};

/// Keep the first occurrence of every name (case-insensitive), preserving order
pub fn dedup_within_batch<I>(candidates: I) -> Vec<NameCandidate>
where
    I: IntoIterator<Item = NameCandidate>,
{
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.key()))
        .collect()
}

/// Ordered, bounded, duplicate-free history for one category
#[derive(Debug, Clone)]
pub struct CategoryHistory {
    /// Oldest first
    entries: Vec<NameCandidate>,

    /// Lowercased names of `entries`
    keys: HashSet<String>,

    cap: usize,
}

impl CategoryHistory {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            keys: HashSet::new(),
            cap,
        }
    }

    pub fn contains(&self, candidate: &NameCandidate) -> bool {
        self.keys.contains(&candidate.key())
    }

    /// Candidates whose name is not yet in the history
    pub fn filter_fresh(&self, candidates: &[NameCandidate]) -> Vec<NameCandidate> {
        candidates
            .iter()
            .filter(|candidate| !self.contains(candidate))
            .cloned()
            .collect()
    }

    /// Append, drop later duplicates, then keep only the most recent `cap` entries
    pub fn merge(&mut self, fresh: &[NameCandidate]) {
        for candidate in fresh {
            if self.keys.insert(candidate.key()) {
                self.entries.push(candidate.clone());
            }
        }

        if self.entries.len() > self.cap {
            let overflow = self.entries.len() - self.cap;
            for evicted in self.entries.drain(..overflow) {
                self.keys.remove(&evicted.key());
            }
        }
    }

    pub fn entries(&self) -> &[NameCandidate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Process-wide store of category histories and search frequencies.
///
/// Each category's history sits behind its own lock, so a merge for one
/// category is a single exclusive read-modify-write and never blocks others.
pub struct HistoryStore {
    histories: RwLock<HashMap<CategoryKey, Arc<Mutex<CategoryHistory>>>>,
    frequencies: RwLock<HashMap<CategoryKey, u64>>,
    cap: usize,
}

impl HistoryStore {
    pub fn new(cap: usize) -> Self {
        Self {
            histories: RwLock::new(HashMap::new()),
            frequencies: RwLock::new(HashMap::new()),
            cap,
        }
    }

    /// Bump the search count for a category and return the new count
    pub async fn record_search(&self, key: &CategoryKey) -> u64 {
        let mut frequencies = self.frequencies.write().await;
        let count = frequencies.entry(key.clone()).or_insert(0);
        *count += 1;
        *count
    }

    /// Candidates absent from the category's history; does not mutate it
    pub async fn record_and_filter(&self, key: &CategoryKey, candidates: &[NameCandidate]) -> Vec<NameCandidate> {
        let history = self.slot(key).await;
        let guard = history.lock().await;
        guard.filter_fresh(candidates)
    }

    /// Merge fresh names into the category's history under its exclusive lock
    pub async fn merge(&self, key: &CategoryKey, fresh: &[NameCandidate]) {
        let history = self.slot(key).await;
        let mut guard = history.lock().await;
        guard.merge(fresh);
    }

    /// Snapshot of a category's history, oldest first
    pub async fn history(&self, key: &CategoryKey) -> Vec<NameCandidate> {
        let histories = self.histories.read().await;
        match histories.get(key) {
            Some(history) => history.lock().await.entries().to_vec(),
            None => Vec::new(),
        }
    }

    pub async fn frequency(&self, key: &CategoryKey) -> u64 {
        self.frequencies.read().await.get(key).copied().unwrap_or(0)
    }

    /// Snapshot of the whole frequency table
    pub async fn frequencies(&self) -> Vec<(CategoryKey, u64)> {
        self.frequencies
            .read()
            .await
            .iter()
            .map(|(key, count)| (key.clone(), *count))
            .collect()
    }

    /// Get or create the history slot for a category
    async fn slot(&self, key: &CategoryKey) -> Arc<Mutex<CategoryHistory>> {
        if let Some(history) = self.histories.read().await.get(key) {
            return Arc::clone(history);
        }

        let mut histories = self.histories.write().await;
        Arc::clone(
            histories
                .entry(key.clone())
                .or_insert_with(|| Arc::new(Mutex::new(CategoryHistory::new(self.cap)))),
        )
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(30)
    }
}
