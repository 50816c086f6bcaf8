use serde::{Deserialize, Serialize};

use crate::scene::LEVEL_COUNT;

/// Result of a single level clear, as shown on the victory screen.
///
/// Sentinel values (`-1`, `"NULL"`) mark fields that were never filled in;
/// a default `RankStats` compares below any real score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankStats {
    pub straggler_bonus: i32,
    pub danger_bonus: i32,
    pub bubbles_popped: i32,
    pub max_combo: i32,
    pub score: i32,
    pub rank: String,
}

impl Default for RankStats {
    fn default() -> Self {
        Self {
            straggler_bonus: -1,
            danger_bonus: -1,
            bubbles_popped: -1,
            max_combo: -1,
            score: -1,
            rank: "NULL".to_string(),
        }
    }
}

/// The full progression record for one player.
///
/// This is the exact shape of the on-disk document. On-disk field names
/// are camelCase, fixed by already-shipped save files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveData {
    /// Scene to resume from: the last level or cutscene entered, or the
    /// level queued up by the results-screen pre-write.
    pub last_played_scene: Option<String>,
    pub played_before: bool,
    pub seen_tutorial: bool,
    pub finished_game: bool,
    /// One slot per level, indexed by the level's catalog position.
    pub high_scores: [Option<RankStats>; LEVEL_COUNT],
}
