//! Search over a contact store and its name index
//!
//! `SearchService` is the single owner of a [`ContactStore`] and a
//! [`NameIndex`]. All mutations go through it so the two never diverge.

use std::collections::HashSet;

use crate::models::Contact;

use super::store::{ContactStore, MemoryContactStore};
use super::trie::{NameIndex, PrefixIndex};

/// Answers textual queries against a set of contacts
#[derive(Debug, Clone, Default)]
pub struct SearchService<S = MemoryContactStore, I = PrefixIndex> {
    store: S,
    index: I,
}

impl<S: ContactStore, I: NameIndex> SearchService<S, I> {
    /// Wrap a store and an index that already agree with each other
    pub fn new(store: S, index: I) -> Self {
        Self { store, index }
    }

    /// Build the index from every contact currently in `store`
    pub fn from_store(store: S, mut index: I) -> Self {
        for contact in store.list() {
            index.insert(contact.name());
        }
        Self { store, index }
    }

    /// Add a contact to both the store and the index
    pub fn add(&mut self, contact: Contact) {
        self.index.insert(contact.name());
        self.store.add(contact);
    }

    /// Remove every contact named `name` (ignoring case)
    ///
    /// The index loses exactly one occurrence per removed contact.
    pub fn remove(&mut self, name: &str) -> Vec<Contact> {
        let removed = self.store.remove(name);
        for contact in &removed {
            self.index.delete(contact.name());
        }
        removed
    }

    /// All contacts in store order
    pub fn list(&self) -> &[Contact] {
        self.store.list()
    }

    /// Contacts matching `query`, in store order
    ///
    /// A contact matches when its name starts with the query (ignoring case),
    /// its phone contains the query verbatim, or its email contains the query
    /// ignoring case. An empty query therefore matches every contact.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        let lowered = query.to_lowercase();
        let name_matches: HashSet<String> = self
            .index
            .search_by_prefix(&lowered)
            .iter()
            .map(|name| name.to_lowercase())
            .collect();

        self.store
            .list()
            .iter()
            .filter(|contact| {
                name_matches.contains(&contact.name().to_lowercase())
                    || contact.phone().contains(query)
                    || contact.email().to_lowercase().contains(&lowered)
            })
            .cloned()
            .collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn into_parts(self) -> (S, I) {
        (self.store, self.index)
    }
}
