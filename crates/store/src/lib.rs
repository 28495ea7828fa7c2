//! High score persistence.
//!
//! A small JSON file on disk, read on startup and rewritten whenever a game
//! ends with a new personal best. Writes go through a temp file rename so a
//! crash mid-write cannot corrupt the score list.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How many scores the file keeps.
const MAX_SCORES: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScoreFile {
    /// Sorted descending, at most [`MAX_SCORES`] entries.
    scores: Vec<u32>,
}

/// On-disk high score store.
#[derive(Debug)]
pub struct ScoreStore {
    path: PathBuf,
    file: ScoreFile,
}

impl ScoreStore {
    /// Open a store backed by `path`. A missing file is an empty store; a
    /// file that fails to parse is an error so a corrupted list is never
    /// silently overwritten.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("malformed score file {}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => ScoreFile::default(),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        };
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best score on record, 0 when empty.
    pub fn best(&self) -> u32 {
        self.file.scores.first().copied().unwrap_or(0)
    }

    pub fn scores(&self) -> &[u32] {
        &self.file.scores
    }

    /// Record a finished game's score. Returns true when it made the list
    /// (which also means the file was rewritten). A score of zero is never
    /// recorded.
    pub fn record(&mut self, score: u32) -> Result<bool> {
        if score == 0 {
            return Ok(false);
        }
        if self.file.scores.len() >= MAX_SCORES
            && score <= *self.file.scores.last().unwrap_or(&0)
        {
            return Ok(false);
        }

        let pos = self
            .file
            .scores
            .iter()
            .position(|&s| s < score)
            .unwrap_or(self.file.scores.len());
        self.file.scores.insert(pos, score);
        self.file.scores.truncate(MAX_SCORES);
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        let text = serde_json::to_string_pretty(&self.file)?;
        fs::write(&tmp, text).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

/// Default score file location: `$XDG_DATA_HOME/blockfall/scores.json`, or
/// the platform equivalent under the home directory.
pub fn default_score_path() -> PathBuf {
    let base = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("blockfall").join("scores.json")
}
