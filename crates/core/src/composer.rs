use std::collections::HashSet;

use crate::messages;

/// Ordered accumulator of response lines.
///
/// A line that repeats an earlier one is dropped, so each text keeps the
/// position of its first occurrence.
#[derive(Debug, Clone, Default)]
pub struct ResponseComposer {
    lines: Vec<String>,
    seen: HashSet<String>,
}

impl ResponseComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the line was already present.
    pub fn push(&mut self, line: impl Into<String>) -> bool {
        let line = line.into();
        if self.seen.contains(&line) {
            return false;
        }
        self.seen.insert(line.clone());
        self.lines.push(line);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Never returns an empty sequence.
    pub fn finish(self) -> Vec<String> {
        if self.lines.is_empty() {
            vec![messages::NOTHING_FOUND.to_string()]
        } else {
            self.lines
        }
    }
}
