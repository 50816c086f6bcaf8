//! # popple-save
//!
//! Save persistence engine for Popple.
//!
//! This crate provides:
//! - The persisted progression record ([`SaveData`], [`RankStats`])
//! - An obfuscating on-disk codec ([`SaveCodec`])
//! - The in-memory save manager with high-score arbitration ([`SaveManager`])
//! - Scene classification against the game's level and cutscene lists
//!
//! ## Ownership
//!
//! The application builds one [`SaveManager`] during startup and injects
//! it into every collaborator that touches progression state (the
//! continue button, tutorial gating, level select, the results flow).
//! The manager is the sole writer; collaborators only see accessor
//! results and the booleans returned by mutators.

pub mod error;
pub mod save;
pub mod scene;

pub use error::{Error, Result};
pub use save::{RankStats, SaveCodec, SaveData, SaveManager};
pub use scene::{LEVEL_COUNT, SceneCatalog, SceneKind};
