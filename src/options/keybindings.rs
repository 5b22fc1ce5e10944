use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::NavAction;

/// Which key triggers each navigation request.
///
/// Keys are DOM-style key names such as `"ArrowRight"`. Only `bindings` is
/// serialized; the key index is derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Key name for each bound action.
    pub bindings: HashMap<NavAction, String>,
    #[serde(skip)]
    by_key: HashMap<String, NavAction>,
}

impl KeybindingOptions {
    /// Options using exactly `bindings`, already indexed.
    #[must_use]
    pub fn from_bindings(bindings: HashMap<NavAction, String>) -> Self {
        let mut options = Self {
            bindings,
            by_key: HashMap::new(),
        };
        options.reindex();
        options
    }

    /// Re-derive the key index after `bindings` changed. Deserialized
    /// options must be reindexed before [`lookup`](Self::lookup) sees them.
    pub fn reindex(&mut self) {
        self.by_key = self
            .bindings
            .iter()
            .map(|(action, key)| (key.clone(), *action))
            .collect();
    }

    /// Navigation action bound to `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavAction> {
        self.by_key.get(key).copied()
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::from_bindings(HashMap::from([
            (NavAction::Previous, "ArrowLeft".into()),
            (NavAction::Next, "ArrowRight".into()),
            (NavAction::Overview, "Home".into()),
        ]))
    }
}

impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_are_visible_after_reindex() {
        let mut keys = KeybindingOptions::default();
        let _ = keys.bindings.insert(NavAction::Overview, "Escape".into());
        assert_eq!(keys.lookup("Home"), Some(NavAction::Overview));

        keys.reindex();
        assert_eq!(keys.lookup("Escape"), Some(NavAction::Overview));
        assert_eq!(keys.lookup("Home"), None);
    }

    #[test]
    fn equality_ignores_the_index() {
        let mut stale = KeybindingOptions::default();
        stale.by_key.clear();
        assert_eq!(stale, KeybindingOptions::default());
        assert_ne!(
            KeybindingOptions::from_bindings(HashMap::new()),
            KeybindingOptions::default()
        );
    }
}
