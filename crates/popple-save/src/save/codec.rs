//! On-disk encoding for save data.
//!
//! A save file is a pretty-printed JSON document XORed byte-by-byte
//! against a fixed keyword. The XOR pass is symmetric, so decoding is the
//! same operation as encoding. It is deliberately weak: it keeps players
//! from casually editing their high scores in a text editor, nothing
//! more. The keyword is part of the format; bytes written under a
//! different keyword decode to garbage and surface as
//! [`Error::CorruptData`](crate::error::Error::CorruptData).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::save::SaveData;

/// Fixed save file name.
const SAVE_FILE: &str = "save.dat";

/// Directory under the platform data dir, shared with the shipped game.
const APP_DIR: &str = "Popple";

/// Obfuscation keyword. Changing it invalidates every existing save file.
const CODEWORD: &[u8] = b")Mx\x0e-PA\x1fZ\x07C&\x06|(5hx%Zp-(IB\x19\x1eHEg)d";

/// Reads and writes [`SaveData`] at a fixed file path.
///
/// The codec knows nothing about when to save or what the fields mean;
/// that policy lives in [`SaveManager`](crate::save::SaveManager).
pub struct SaveCodec {
    path: PathBuf,
}

impl SaveCodec {
    /// Codec operating on an explicit file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Codec operating on `save.dat` under the platform's per-user data
    /// directory. `None` when the platform exposes no such directory.
    pub fn in_default_dir() -> Option<Self> {
        let dir = dirs::data_dir()?;
        Some(Self::new(dir.join(APP_DIR).join(SAVE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize, obfuscate and write `data`, replacing any previous file.
    ///
    /// The bytes go to a temp file in the same directory which is then
    /// renamed over the target, so a crash mid-write leaves the previous
    /// save intact instead of a truncated file.
    pub fn write(&self, data: &SaveData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        let mut bytes = json.into_bytes();
        xor_cipher(&mut bytes, CODEWORD);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        fs::rename(&tmp_path, &self.path)?;

        debug!("wrote save file to {}", self.path.display());
        Ok(())
    }

    /// Read the save file back.
    ///
    /// Returns `Ok(None)` when no file exists yet: the normal state
    /// before the first write, not an error. A file that exists but does
    /// not decode reports [`Error::CorruptData`](crate::error::Error::CorruptData).
    pub fn read(&self) -> Result<Option<SaveData>> {
        let mut bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no save file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        xor_cipher(&mut bytes, CODEWORD);
        let data = serde_json::from_slice(&bytes)?;
        Ok(Some(data))
    }
}

/// Byte-wise XOR against a repeating keyword. Self-inverse.
fn xor_cipher(bytes: &mut [u8], keyword: &[u8]) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte ^= keyword[i % keyword.len()];
    }
}
