use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Number of records kept on the leaderboard.
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Longest player name the save prompt accepts.
pub const NAME_MAX_CHARS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    /// Display-formatted timestamp, date first.
    pub date: String,
}

impl ScoreRecord {
    pub fn new(score: u32, date: impl Into<String>) -> Self {
        Self {
            score,
            date: date.into(),
        }
    }

    /// The date part of the timestamp, everything before the first space.
    pub fn day(&self) -> &str {
        self.date.split(' ').next().unwrap_or_default()
    }
}

/// Historical scores, best first, at most [`LEADERBOARD_CAPACITY`] of them.
///
/// Serialized as a plain JSON array of `{score, date}` objects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ScoreRecord>", into = "Vec<ScoreRecord>")]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn from_records(mut records: Vec<ScoreRecord>) -> Self {
        // stable, ties keep their relative order
        records.sort_by(|a, b| b.score.cmp(&a.score));
        records.truncate(LEADERBOARD_CAPACITY);
        Self { records }
    }

    /// Parses stored JSON, anything unreadable counts as an empty leaderboard.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<ScoreRecord>>(json) {
            Ok(records) => Self::from_records(records),
            Err(err) => {
                log::warn!("Discarding malformed leaderboard: {}", err);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn best(&self) -> Option<u32> {
        self.records.first().map(|record| record.score)
    }

    /// Adds a record and returns its rank, or `None` when it did not make the cut.
    ///
    /// A new record ranks after existing records with the same score.
    pub fn insert(&mut self, record: ScoreRecord) -> Option<usize> {
        let rank = self
            .records
            .partition_point(|existing| existing.score >= record.score);
        if rank >= LEADERBOARD_CAPACITY {
            return None;
        }

        self.records.insert(rank, record);
        self.records.truncate(LEADERBOARD_CAPACITY);
        Some(rank)
    }
}

impl From<Vec<ScoreRecord>> for Leaderboard {
    fn from(records: Vec<ScoreRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<Leaderboard> for Vec<ScoreRecord> {
    fn from(leaderboard: Leaderboard) -> Self {
        leaderboard.records
    }
}

/// Saving is only offered for games that scored something.
pub const fn offers_save(final_score: u32) -> bool {
    final_score > 0
}

/// Whether the save prompt may submit, a name is required even though it is not stored.
pub fn can_save(final_score: u32, player_name: &str) -> bool {
    offers_save(final_score) && !player_name.trim().is_empty()
}

/// Cuts a typed name down to [`NAME_MAX_CHARS`] characters.
pub fn clamp_name(player_name: &str) -> String {
    player_name.chars().take(NAME_MAX_CHARS).collect()
}
