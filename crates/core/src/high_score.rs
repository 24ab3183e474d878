//! Leaderboard - the top scores, best first
//!
//! The table holds at most [`HIGH_SCORE_CAPACITY`] records in a fixed-size
//! `ArrayVec`. Persistence is the caller's job; [`Record`] derives serde
//! traits so callers can store `records()` however they like.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::HIGH_SCORE_CAPACITY;

/// One leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub description: String,
    pub score: u32,
}

impl Record {
    pub fn new(description: impl Into<String>, score: u32) -> Self {
        Self {
            description: description.into(),
            score,
        }
    }
}

/// Bounded leaderboard sorted by descending score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScore {
    records: ArrayVec<Record, HIGH_SCORE_CAPACITY>,
}

impl HighScore {
    /// Build from prior records. Keeps the best [`HIGH_SCORE_CAPACITY`].
    pub fn new(records: impl IntoIterator<Item = Record>) -> Self {
        let mut all: Vec<Record> = records.into_iter().collect();
        sort_desc(&mut all);
        Self {
            records: all.into_iter().take(HIGH_SCORE_CAPACITY).collect(),
        }
    }

    /// Re-sort by descending score. Equal scores keep their order.
    pub fn sort(&mut self) {
        sort_desc(&mut self.records);
    }

    /// Insert a record and keep the table sorted and bounded.
    ///
    /// Returns the 0-based rank of the new record, or `None` when the table
    /// is full and `score` does not beat its lowest entry.
    pub fn add(&mut self, score: u32, description: impl Into<String>) -> Option<usize> {
        if self.records.is_full() {
            let lowest = self.records.last().map_or(0, |r| r.score);
            if score <= lowest {
                return None;
            }
            self.records.pop();
        }

        self.records.push(Record::new(description, score));
        self.sort();

        // Stable sort: the new record sits after any equal scores.
        self.records.iter().rposition(|r| r.score == score)
    }

    /// Would `score` make it onto the table?
    pub fn qualifies(&self, score: u32) -> bool {
        !self.records.is_full() || self.records.last().is_some_and(|r| score > r.score)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Best score so far
    pub fn best(&self) -> Option<u32> {
        self.records.first().map(|r| r.score)
    }
}

fn sort_desc(records: &mut [Record]) {
    records.sort_by(|a, b| b.score.cmp(&a.score));
}
