use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// Single static counter for all text elements
static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of a text element, fixed for the element's whole lifetime.
///
/// Ids are handed out in creation order, so comparing two ids also tells
/// which element was added first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// Draw a fresh id from the process-wide counter
    pub fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let first = ElementId::next();
        let second = ElementId::next();
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn test_display_format() {
        let id = ElementId::next();
        assert_eq!(id.to_string(), format!("#{}", id.0));
    }
}
