use std::collections::VecDeque;

use crate::document::Document;

/// Linear undo/redo log over whole document snapshots.
///
/// `past` holds older snapshots with the most recent last, `future` holds
/// undone snapshots with the next one to redo first. Committing a new
/// snapshot discards `future` for good.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct History {
    past: Vec<Document>,
    present: Document,
    future: VecDeque<Document>,
    /// Maximum length of `past`, oldest entries are dropped first
    limit: Option<usize>,
}

impl History {
    /// Creates a history whose present is `initial` and with nothing to undo or redo
    pub fn new(initial: Document) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: VecDeque::new(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self.enforce_limit();
        self
    }

    pub fn present(&self) -> &Document {
        &self.present
    }

    pub fn past(&self) -> &[Document] {
        &self.past
    }

    pub fn future(&self) -> &VecDeque<Document> {
        &self.future
    }

    /// Make `next` the present. The old present becomes undoable and redo is lost.
    pub fn commit(&mut self, next: Document) {
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();
        self.enforce_limit();
    }

    /// Step back one snapshot. Returns false, leaving everything as is, when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one snapshot. Returns false, leaving everything as is, when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            let excess = self.past.len().saturating_sub(limit);
            self.past.drain(..excess);
        }
    }
}
