//! Durable raffle state: the master roster and the selected mode, stored as
//! two string-keyed entries (files) under a data directory.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tombola_core::{Mode, Participant};

const ROSTER_KEY: &str = "roster.json";
const MODE_KEY: &str = "mode";

#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `TOMBOLA_DATA` overrides the location; otherwise `$HOME/.tombola`.
    pub fn default_dir() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os("TOMBOLA_DATA") {
            return Some(PathBuf::from(path));
        }
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".tombola"))
    }

    pub fn open_default() -> Option<Self> {
        Self::default_dir().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_roster(&self, roster: &[Participant]) -> Result<()> {
        let body = serde_json::to_string_pretty(roster).context("serialize roster")?;
        self.write_key(ROSTER_KEY, &body)
    }

    /// A missing entry and a corrupt one both come back as "no prior state";
    /// only IO failures other than not-found propagate.
    pub fn load_roster(&self) -> Result<Option<Vec<Participant>>> {
        let Some(body) = self.read_key(ROSTER_KEY)? else {
            return Ok(None);
        };
        Ok(serde_json::from_str(&body).ok())
    }

    pub fn save_mode(&self, mode: Mode) -> Result<()> {
        self.write_key(MODE_KEY, mode.id())
    }

    pub fn load_mode(&self) -> Result<Option<Mode>> {
        let Some(body) = self.read_key(MODE_KEY)? else {
            return Ok(None);
        };
        Ok(Mode::parse(body.trim()))
    }

    /// Removes every key this store owns. Only the explicit, user-confirmed
    /// reset goes through here.
    pub fn clear(&self) -> Result<()> {
        for key in [ROSTER_KEY, MODE_KEY] {
            match fs::remove_file(self.dir.join(key)) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(err).with_context(|| format!("remove {key}")),
            }
        }
        Ok(())
    }

    fn write_key(&self, key: &str, body: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create {}", self.dir.display()))?;
        fs::write(self.dir.join(key), body).with_context(|| format!("write {key}"))
    }

    fn read_key(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.dir.join(key)) {
            Ok(body) => Ok(Some(body)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("read {key}")),
        }
    }
}
