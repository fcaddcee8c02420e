use std::ffi::{OsStr, OsString};

/// In-memory log of dispatched command lines, oldest first.
///
/// Entries keep the exact bytes that were typed.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<OsString>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `command` followed by its arguments, joined by single spaces.
    pub fn record(&mut self, command: &OsStr, args: &[OsString]) {
        let mut entry = command.to_os_string();
        for arg in args {
            entry.push(" ");
            entry.push(arg);
        }
        self.entries.push(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &OsStr> {
        self.entries.iter().map(OsString::as_os_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
