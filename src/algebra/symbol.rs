//! Symbolic unknowns.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// A symbolic unknown such as a mixed-strategy probability.
///
/// Symbols compare by identity: two symbols created with the same name are
/// still distinct unknowns. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    id: u32,
    name: Arc<str>,
}

impl Symbol {
    /// Create a fresh symbol with a display name.
    pub fn new(name: &str) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            name: Arc::from(name),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The two free strategy parameters of the AKQ game.
#[derive(Debug, Clone)]
pub struct Symbols {
    /// First player's bluff frequency with the Queen.
    pub bet: Symbol,
    /// Second player's call frequency with the King.
    pub call: Symbol,
}

impl Symbols {
    /// Create the canonical `b` and `c` unknowns.
    pub fn new() -> Self {
        Self {
            bet: Symbol::new("b"),
            call: Symbol::new("c"),
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct_by_identity() {
        let a = Symbol::new("x");
        let b = Symbol::new("x");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.to_string(), "x");
    }

    #[test]
    fn test_canonical_names() {
        let symbols = Symbols::new();
        assert_eq!(symbols.bet.name(), "b");
        assert_eq!(symbols.call.name(), "c");
    }
}
