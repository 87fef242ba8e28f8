//! JSON file event store.
//!
//! The whole collection lives in one file, `{ "events": [...] }`, rewritten
//! on every change. Good enough for a personal calendar; durability beyond
//! that is out of scope.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HaruResult;
use crate::event::Event;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Db {
    events: Vec<Event>,
}

#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: PathBuf) -> Self {
        EventStore { path }
    }

    /// `<data_dir>/haru/events.json`, falling back to the working directory
    /// on platforms without a data dir.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("haru")
            .join("events.json")
    }

    pub fn open_default() -> Self {
        EventStore::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all events. A missing file is an empty collection, not an error.
    pub fn load(&self) -> HaruResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let db: Db = serde_json::from_str(&content)?;
        Ok(db.events)
    }

    /// Replace the stored collection.
    pub fn save(&self, events: &[Event]) -> HaruResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Db {
            events: events.to_vec(),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&db)?)?;
        Ok(())
    }
}
