use serde::{Deserialize, Serialize};

use super::records::{Goal, JournalEntry};

/// Aggregate counts over one user's entries and goals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_entries: usize,
    pub total_goals: usize,
    pub completed_goals: usize,
    pub total_words: usize,
}

impl UserStats {
    pub fn compute(entries: &[JournalEntry], goals: &[Goal]) -> Self {
        Self {
            total_entries: entries.len(),
            total_goals: goals.len(),
            completed_goals: goals.iter().filter(|goal| goal.completed).count(),
            total_words: entries.iter().map(JournalEntry::word_count).sum(),
        }
    }
}
