use serde::{Deserialize, Serialize};

/// A single historical event in a crew member's career or flight log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewLogEntry {
    /// Index of the flight the event occurred on
    #[serde(default)]
    pub flight: u32,
    /// Event kind, e.g. "Launch", "Land", "Recover"
    #[serde(rename = "type")]
    pub kind: String,
    /// Celestial body or vessel the event targeted, if any
    #[serde(default)]
    pub target: Option<String>,
}

/// An ordered, append-only log of crew history events.
///
/// When a remote record carries a log section, the incoming snapshot is
/// authoritative: the whole log is replaced (clear-then-reload), never
/// partially merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrewLog {
    entries: Vec<CrewLogEntry>,
}

impl CrewLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: CrewLogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[CrewLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Atomically replaces the whole log with an incoming snapshot
    pub fn replace_with(&mut self, entries: Vec<CrewLogEntry>) {
        self.entries.clear();
        self.entries.extend(entries);
    }

    pub(crate) fn take_entries(self) -> Vec<CrewLogEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::{CrewLog, CrewLogEntry};

    fn entry(kind: &str) -> CrewLogEntry {
        CrewLogEntry {
            flight: 0,
            kind: kind.to_string(),
            target: Some("Kerbin".to_string()),
        }
    }

    #[test]
    fn replace_discards_old_entries() {
        let mut log = CrewLog::new();
        log.push(entry("Launch"));
        log.push(entry("Orbit"));
        log.push(entry("Land"));

        log.replace_with(vec![entry("Recover")]);

        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].kind, "Recover");
    }
}
