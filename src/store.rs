//! Slot assignment store: which article sits in which slot.
//!
//! # Invariants
//! - An article id is in the used-set exactly when some slot holds it.
//! - An article occupies at most one slot; placing it elsewhere vacates the
//!   old slot.
//! - A pinned headline size belongs to the content it was set on and is
//!   dropped whenever the slot is reassigned or cleared.

use std::collections::{BTreeMap, BTreeSet};

use dioxus::logger::tracing::debug;

use crate::catalog::{ArticleId, Catalog};
use crate::slot::{Slot, LAYOUT};

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    slot: Slot,
    article: Option<ArticleId>,
    pinned_size: Option<f64>,
}

/// Outcome of a successful [`SlotStore::assign`].
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub slot: Slot,
    /// Different article the slot held before, now unused.
    pub replaced: Option<ArticleId>,
    /// Other slot the article was moved out of.
    pub vacated: Option<Slot>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlotStore {
    entries: Vec<Entry>,
    used: BTreeSet<ArticleId>,
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotStore {
    pub fn new() -> Self {
        Self {
            entries: LAYOUT
                .iter()
                .map(|slot| Entry {
                    slot: *slot,
                    article: None,
                    pinned_size: None,
                })
                .collect(),
            used: BTreeSet::new(),
        }
    }

    fn entry(&self, slot_name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.slot.name == slot_name)
    }

    fn entry_mut(&mut self, slot_name: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.slot.name == slot_name)
    }

    /// Places `article_id` in `slot_name`. Unknown slots and ids that do not
    /// resolve in the catalog leave the store untouched.
    pub fn assign(&mut self, catalog: &Catalog, slot_name: &str, article_id: &str) -> Option<Assignment> {
        let Some(article) = catalog.find(article_id) else {
            debug!(slot = slot_name, article = article_id, "assign skipped, unknown article");
            return None;
        };
        let id = article.id.clone();
        let slot = self.entry(slot_name)?.slot;

        let vacated = self
            .entries
            .iter_mut()
            .find(|e| e.slot.name != slot_name && e.article.as_ref() == Some(&id))
            .map(|e| {
                e.article = None;
                e.pinned_size = None;
                e.slot
            });

        let entry = self.entry_mut(slot_name)?;
        let previous = entry.article.replace(id.clone());
        entry.pinned_size = None;

        let replaced = previous.filter(|p| *p != id);
        if let Some(old) = &replaced {
            self.used.remove(old);
        }
        self.used.insert(id);

        Some(Assignment {
            slot,
            replaced,
            vacated,
        })
    }

    /// Empties a slot and returns the article it held.
    pub fn clear(&mut self, slot_name: &str) -> Option<ArticleId> {
        let entry = self.entry_mut(slot_name)?;
        entry.pinned_size = None;
        let previous = entry.article.take()?;
        self.used.remove(&previous);
        Some(previous)
    }

    pub fn get(&self, slot_name: &str) -> Option<&ArticleId> {
        self.entry(slot_name)?.article.as_ref()
    }

    /// Full slot-name → article-id mapping, empty slots included.
    pub fn get_all(&self) -> BTreeMap<String, Option<ArticleId>> {
        self.entries
            .iter()
            .map(|e| (e.slot.name.to_string(), e.article.clone()))
            .collect()
    }

    pub fn is_used(&self, article_id: &str) -> bool {
        self.used.iter().any(|id| id.as_str() == article_id)
    }

    pub fn used(&self) -> &BTreeSet<ArticleId> {
        &self.used
    }

    pub fn is_filled(&self, slot_name: &str) -> bool {
        self.get(slot_name).is_some()
    }

    pub fn pin_size(&mut self, slot_name: &str, size_px: f64) {
        if let Some(entry) = self.entry_mut(slot_name) {
            if entry.article.is_some() {
                entry.pinned_size = Some(size_px);
            }
        }
    }

    pub fn pinned_size(&self, slot_name: &str) -> Option<f64> {
        self.entry(slot_name)?.pinned_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Article;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Article::new("a", "A"), Article::new("b", "B"), Article::new("c", "C")],
            vec![],
        )
    }

    #[test]
    fn reassigning_frees_previous_article() {
        let catalog = catalog();
        let mut store = SlotStore::new();
        store.assign(&catalog, "puff1", "a").unwrap();
        let outcome = store.assign(&catalog, "puff1", "b").unwrap();

        assert_eq!(outcome.replaced, Some(ArticleId::new("a")));
        assert!(store.is_used("b"));
        assert!(!store.is_used("a"));
        assert_eq!(store.used().len(), 1);
    }

    #[test]
    fn unknown_article_is_a_no_op() {
        let catalog = catalog();
        let mut store = SlotStore::new();
        store.assign(&catalog, "citat", "a").unwrap();

        assert!(store.assign(&catalog, "citat", "zzz").is_none());
        assert_eq!(store.get("citat"), Some(&ArticleId::new("a")));
    }

    #[test]
    fn unknown_slot_is_a_no_op() {
        let catalog = catalog();
        let mut store = SlotStore::new();
        assert!(store.assign(&catalog, "puff9", "a").is_none());
        assert!(store.used().is_empty());
    }

    #[test]
    fn placing_article_twice_moves_it() {
        let catalog = catalog();
        let mut store = SlotStore::new();
        store.assign(&catalog, "liten1", "a").unwrap();
        let outcome = store.assign(&catalog, "liten2", "a").unwrap();

        assert_eq!(outcome.vacated.map(|s| s.name), Some("liten1"));
        assert!(store.get("liten1").is_none());
        assert!(store.is_used("a"));
    }

    #[test]
    fn clear_frees_article() {
        let catalog = catalog();
        let mut store = SlotStore::new();
        store.assign(&catalog, "mellan1", "c").unwrap();

        assert_eq!(store.clear("mellan1"), Some(ArticleId::new("c")));
        assert!(!store.is_used("c"));
        assert_eq!(store.clear("mellan1"), None);
    }

    #[test]
    fn pins_drop_on_reassign() {
        let catalog = catalog();
        let mut store = SlotStore::new();
        store.pin_size("liten1", 12.0);
        assert_eq!(store.pinned_size("liten1"), None);

        store.assign(&catalog, "liten1", "a").unwrap();
        store.pin_size("liten1", 12.0);
        assert_eq!(store.pinned_size("liten1"), Some(12.0));

        store.assign(&catalog, "liten1", "b").unwrap();
        assert_eq!(store.pinned_size("liten1"), None);
    }

    #[test]
    fn get_all_keeps_empty_slots() {
        let catalog = catalog();
        let mut store = SlotStore::new();
        store.assign(&catalog, "huvudnyhet", "a").unwrap();
        let all = store.get_all();

        assert_eq!(all.len(), LAYOUT.len());
        assert_eq!(all["huvudnyhet"], Some(ArticleId::new("a")));
        assert_eq!(all["puff1"], None);
    }
}
