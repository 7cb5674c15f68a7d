//! Key binding table.

use crate::command::Command;
use crate::sequence::KeySeq;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

/// One key-sequence → command binding.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Binding {
    pub sequence: KeySeq,
    pub command: Command,
}

/// Ordered table of key bindings.
///
/// Binding an already-bound sequence replaces the command in place, so a
/// later assignment overrides an earlier one without reordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<Binding>,
}

impl Bindings {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a sequence to a command.
    pub fn bind(&mut self, sequence: KeySeq, command: Command) {
        if let Some(entry) = self.entries.iter_mut().find(|b| b.sequence == sequence) {
            debug!("rebinding {}: {}", sequence, command);
            entry.command = command;
        } else {
            self.entries.push(Binding { sequence, command });
        }
    }

    /// Look up the command bound to a sequence.
    pub fn get(&self, sequence: &KeySeq) -> Option<&Command> {
        self.entries
            .iter()
            .find(|b| b.sequence == *sequence)
            .map(|b| &b.command)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no bindings are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.entries.iter()
    }
}

impl Serialize for Bindings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for binding in &self.entries {
            map.serialize_entry(&binding.sequence, &binding.command)?;
        }
        map.end()
    }
}
