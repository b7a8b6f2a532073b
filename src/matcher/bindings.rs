// WHY: Placeholder bindings are the only mutable state of a validation run.
// Keeping them behind a small table type makes the injectivity and
// consistency rules testable in isolation from the scanner.

use std::collections::HashMap;

/// Outcome of binding a placeholder name to a captured token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    /// First time this name was seen; the pair was recorded
    Bound,
    /// Name was already bound to the same token
    Consistent,
    /// Empty-name placeholder - a "don't care" wildcard whose bind cannot fail
    Wildcard,
    /// Binding would violate consistency or injectivity
    Conflict(BindConflict),
}

/// Why a binding attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindConflict {
    /// The name is already bound to a different token
    Inconsistent { existing_token: String },
    /// The token is already claimed by a different name
    TokenClaimed { existing_name: String },
}

/// Mapping from placeholder name to captured token, built incrementally
/// during one validation run and discarded afterwards.
///
/// Invariant on every successful run: the table is a partial bijection.
/// Distinct names map to distinct tokens, and a name seen twice must have
/// captured the same token both times. The wildcard slot (empty name) is
/// part of the table, so its latest token blocks named claims too.
#[derive(Debug, Default)]
pub struct BindingTable {
    by_name: HashMap<String, String>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name -> token`, enforcing functional consistency and
    /// injectivity. The empty name is a "don't care" wildcard: its own bind
    /// never fails and repeated captures simply overwrite, but the token it
    /// currently holds still counts as claimed when a later non-empty name
    /// tries to bind it.
    pub fn bind(&mut self, name: &str, token: &str) -> BindOutcome {
        if name.is_empty() {
            self.by_name.insert(String::new(), token.to_string());
            return BindOutcome::Wildcard;
        }

        if let Some(existing) = self.by_name.get(name) {
            if existing == token {
                return BindOutcome::Consistent;
            }
            return BindOutcome::Conflict(BindConflict::Inconsistent {
                existing_token: existing.clone(),
            });
        }

        // WHY: linear scan over values - tables hold a handful of entries,
        // and a reverse index would lose the name needed for diagnostics
        if let Some((claimed_by, _)) = self.by_name.iter().find(|(_, bound)| bound.as_str() == token) {
            return BindOutcome::Conflict(BindConflict::TokenClaimed {
                existing_name: claimed_by.clone(),
            });
        }

        self.by_name.insert(name.to_string(), token.to_string());
        BindOutcome::Bound
    }

    /// Number of recorded bindings, the wildcard slot included
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Look up the token currently bound to a name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_binding_is_recorded() {
        let mut table = BindingTable::new();
        assert_eq!(table.bind("x", "foo"), BindOutcome::Bound);
        assert_eq!(table.get("x"), Some("foo"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_repeated_consistent_binding_succeeds() {
        let mut table = BindingTable::new();
        assert_eq!(table.bind("x", "foo"), BindOutcome::Bound);
        assert_eq!(table.bind("x", "foo"), BindOutcome::Consistent);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_inconsistent_rebinding_conflicts() {
        let mut table = BindingTable::new();
        table.bind("x", "foo");
        assert_eq!(
            table.bind("x", "bar"),
            BindOutcome::Conflict(BindConflict::Inconsistent {
                existing_token: "foo".to_string(),
            })
        );
    }

    #[test]
    fn test_injectivity_violation_conflicts() {
        let mut table = BindingTable::new();
        table.bind("x", "foo");
        assert_eq!(
            table.bind("y", "foo"),
            BindOutcome::Conflict(BindConflict::TokenClaimed {
                existing_name: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_name_is_wildcard() {
        let mut table = BindingTable::new();
        assert_eq!(table.bind("", "foo"), BindOutcome::Wildcard);
        // Repeated wildcard captures overwrite without a consistency check
        assert_eq!(table.bind("", "bar"), BindOutcome::Wildcard);
        assert_eq!(table.get(""), Some("bar"));
    }

    #[test]
    fn test_wildcard_token_blocks_named_binds() {
        let mut table = BindingTable::new();
        assert_eq!(table.bind("", "foo"), BindOutcome::Wildcard);
        // The wildcard's current token is claimed like any other
        assert_eq!(
            table.bind("x", "foo"),
            BindOutcome::Conflict(BindConflict::TokenClaimed {
                existing_name: String::new(),
            })
        );
        // Once the wildcard moves on, its previous token is free again
        assert_eq!(table.bind("", "bar"), BindOutcome::Wildcard);
        assert_eq!(table.bind("x", "foo"), BindOutcome::Bound);
    }

    #[test]
    fn test_empty_token_participates_in_injectivity() {
        let mut table = BindingTable::new();
        assert_eq!(table.bind("x", ""), BindOutcome::Bound);
        assert_eq!(
            table.bind("y", ""),
            BindOutcome::Conflict(BindConflict::TokenClaimed {
                existing_name: "x".to_string(),
            })
        );
    }
}
