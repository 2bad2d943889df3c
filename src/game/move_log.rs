//! Append-only record of moves applied during a session

use crate::core::{DiscId, PegId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One applied move, as shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLogEntry {
    pub disc: DiscId,
    pub from: PegId,
    pub to: PegId,
}

impl fmt::Display for MoveLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move {} from Rod {} to Rod {}",
            self.disc,
            self.from.rod_number(),
            self.to.rod_number()
        )
    }
}

/// Move log for a session
///
/// Entries are only ever appended; the whole log is cleared on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    entries: Vec<MoveLogEntry>,
}

impl MoveLog {
    pub fn new() -> Self {
        MoveLog {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: MoveLogEntry) {
        self.entries.push(entry);
    }

    /// Most recent entry
    pub fn last(&self) -> Option<&MoveLogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[MoveLogEntry] {
        &self.entries
    }

    /// Rendered lines, oldest first
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|entry| entry.to_string())
    }
}
