//! Scene catalog: the fixed level and cutscene lists.
//!
//! Levels are ordered, and a level's position in the list doubles as its
//! high-score slot index in the save file. The catalog also answers the
//! "which level comes next" query used by the save manager's crash-safety
//! pre-write.

use strum::{Display, IntoStaticStr};

/// Number of levels in the game, and thus high-score slots in a save file.
pub const LEVEL_COUNT: usize = 5;

/// How a scene identifier relates to the game's progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum SceneKind {
    #[strum(serialize = "level")]
    Level,
    #[strum(serialize = "cutscene")]
    Cutscene,
    /// Menus, the tutorial, loading scenes. Never recorded in the save.
    #[strum(serialize = "unknown")]
    Unknown,
}

/// The ordered scene identifier lists supplied by the scene subsystem.
#[derive(Debug, Clone)]
pub struct SceneCatalog {
    levels: [String; LEVEL_COUNT],
    cutscenes: Vec<String>,
}

impl SceneCatalog {
    pub fn new(levels: [String; LEVEL_COUNT], cutscenes: Vec<String>) -> Self {
        Self { levels, cutscenes }
    }

    /// The scene wiring shipped with the game.
    pub fn builtin() -> Self {
        Self::new(
            [
                "Level1".into(),
                "Level2".into(),
                "Level3".into(),
                "Level4".into(),
                "Level5".into(),
            ],
            vec![
                "Cutscene_Level1".into(),
                "Cutscene_Level2".into(),
                "Cutscene_Level3".into(),
                "Cutscene_Level4".into(),
                "Cutscene_Level5".into(),
                "Cutscene_Outro".into(),
            ],
        )
    }

    pub fn classify(&self, scene: &str) -> SceneKind {
        if self.level_index(scene).is_some() {
            SceneKind::Level
        } else if self.cutscenes.iter().any(|c| c == scene) {
            SceneKind::Cutscene
        } else {
            SceneKind::Unknown
        }
    }

    /// Position of a level in the ordered list, which is also its
    /// high-score slot index. `None` for anything that is not a level.
    pub fn level_index(&self, scene: &str) -> Option<usize> {
        self.levels.iter().position(|l| l == scene)
    }

    /// The level that follows `scene` in play order. `None` for the last
    /// level and for scenes that are not levels.
    pub fn next_level(&self, scene: &str) -> Option<&str> {
        let index = self.level_index(scene)?;
        self.levels.get(index + 1).map(String::as_str)
    }
}
