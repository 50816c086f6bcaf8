//! In-memory save state and persistence policy.
//!
//! [`SaveManager`] owns the one [`SaveData`] value for the process. The
//! application constructs it once during startup and hands it to the
//! menus, the results flow and the level loader; every mutation funnels
//! through the methods here and is written back to disk as it happens.

use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::save::{RankStats, SaveCodec, SaveData};
use crate::scene::{SceneCatalog, SceneKind};

pub struct SaveManager {
    codec: SaveCodec,
    catalog: SceneCatalog,
    current_scene: Option<String>,
    data: SaveData,
}

impl SaveManager {
    /// Build the manager and hydrate it from disk.
    ///
    /// A missing file starts a fresh save. An unreadable or corrupt file
    /// is logged and also starts a fresh save; startup never fails over
    /// save trouble.
    pub fn new(codec: SaveCodec, catalog: SceneCatalog) -> Self {
        let data = load_or_default(&codec);
        Self {
            codec,
            catalog,
            current_scene: None,
            data,
        }
    }

    /// Note that a scene has been entered.
    ///
    /// Levels update the continue pointer and mark the game as played;
    /// cutscenes update only the pointer; anything else (menus, loading
    /// scenes) leaves the save untouched.
    pub fn enter_scene(&mut self, scene: &str) {
        self.current_scene = Some(scene.to_string());

        let kind = self.catalog.classify(scene);
        debug!("entered scene {scene} ({kind})");

        match kind {
            SceneKind::Level => {
                self.data.last_played_scene = Some(scene.to_string());
                self.data.played_before = true;
                self.persist();
            }
            SceneKind::Cutscene => {
                self.data.last_played_scene = Some(scene.to_string());
                self.persist();
            }
            SceneKind::Unknown => {}
        }
    }

    /// Record `stats` as the high score for the current level if it beats
    /// the stored one. Returns whether a new high score was stored.
    ///
    /// Failures never escape: they are logged and read as "not a high
    /// score" by the results screen.
    pub fn try_set_high_score(&mut self, stats: Option<&RankStats>) -> bool {
        match self.set_high_score(stats) {
            Ok(improved) => improved,
            Err(e) => {
                error!("failed to set high score: {e}");
                false
            }
        }
    }

    fn set_high_score(&mut self, stats: Option<&RankStats>) -> Result<bool> {
        let scene = self.current_scene.clone().unwrap_or_default();
        let Some(index) = self.catalog.level_index(&scene) else {
            return Err(Error::NotALevel(scene));
        };

        // The player has won and the results screen is up. Advance the
        // continue pointer to the next level and persist before anything
        // can go wrong with the stats: a crash while the results are
        // showing must resume into the upcoming level, not replay a
        // stale results screen. The last level has no successor, so the
        // pointer stays put there.
        let next = self.catalog.next_level(&scene).map(str::to_string);
        if let Some(next) = next {
            self.data.last_played_scene = Some(next);
            self.persist();
        }

        let stats = stats.ok_or(Error::MissingStats)?;

        let slot = &mut self.data.high_scores[index];
        let improved = match slot {
            Some(best) => stats.score > best.score,
            None => true,
        };
        if improved {
            info!("new high score for {scene}: {}", stats.score);
            *slot = Some(stats.clone());
            self.persist();
        }
        Ok(improved)
    }

    /// The tutorial overlay has been dismissed.
    pub fn mark_tutorial_seen(&mut self) {
        self.data.seen_tutorial = true;
        self.persist();
    }

    /// The ending cutscene has been reached.
    pub fn mark_game_finished(&mut self) {
        self.data.finished_game = true;
        self.persist();
    }

    /// Scene to resume from, for the continue button. `None` until a
    /// level or cutscene has been entered on any run.
    pub fn last_played_scene(&self) -> Option<&str> {
        match self.data.last_played_scene.as_deref() {
            Some("") | None => None,
            scene => scene,
        }
    }

    pub fn seen_tutorial(&self) -> bool {
        self.data.seen_tutorial
    }

    pub fn played_before(&self) -> bool {
        self.data.played_before
    }

    pub fn finished_game(&self) -> bool {
        self.data.finished_game
    }

    /// Stored high score for a level, for the stat displays. `None` for
    /// an uncleared level or a scene that is not a level.
    pub fn high_score(&self, level: &str) -> Option<&RankStats> {
        let index = self.catalog.level_index(level)?;
        self.data.high_scores[index].as_ref()
    }

    /// Throw away the in-memory state and re-read the file.
    ///
    /// Only meant for the pre-gameplay init scene; any mutation since the
    /// last successful write is lost.
    pub fn reload(&mut self) {
        self.data = load_or_default(&self.codec);
    }

    /// Write the current state to disk. A failed write is logged and the
    /// session continues with unsaved changes.
    fn persist(&self) {
        if let Err(e) = self.codec.write(&self.data) {
            warn!("failed to write save data: {e}");
        }
    }
}

fn load_or_default(codec: &SaveCodec) -> SaveData {
    match codec.read() {
        Ok(Some(data)) => {
            info!("loaded save data from {}", codec.path().display());
            data
        }
        Ok(None) => {
            info!("no save file, starting a fresh save");
            SaveData::default()
        }
        Err(e) => {
            warn!("discarding unreadable save data: {e}");
            SaveData::default()
        }
    }
}
