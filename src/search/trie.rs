//! Prefix index over contact names
//!
//! A character trie keyed by the lowercased name. Every node keeps the
//! original-case names whose lowercased form passes through it, so a prefix
//! lookup is a walk of `prefix.len()` steps followed by returning that node's
//! list, with no subtree traversal.

use std::collections::BTreeMap;
use std::str::Chars;

/// Name lookup by prefix
///
/// Implemented by [`PrefixIndex`]; the search service only depends on this
/// trait so tests can substitute a fake.
pub trait NameIndex {
    /// Record one occurrence of `name`
    fn insert(&mut self, name: &str);

    /// Remove one occurrence of `name`, returning whether anything was removed
    fn delete(&mut self, name: &str) -> bool;

    /// All names whose lowercased form starts with the lowercased `prefix`,
    /// in insertion order and including duplicates
    fn search_by_prefix(&self, prefix: &str) -> &[String];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    /// Names passing through this node
    names: Vec<String>,
}

impl TrieNode {
    fn is_prunable(&self) -> bool {
        self.children.is_empty() && self.names.is_empty()
    }

    /// Remove the first occurrence of `name`
    fn remove_one(&mut self, name: &str) {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
        }
    }

    fn subtree_size(&self) -> usize {
        1 + self
            .children
            .values()
            .map(TrieNode::subtree_size)
            .sum::<usize>()
    }
}

/// Trie mapping lowercase name prefixes to the names that share them
///
/// The root never stores names: insertion appends starting at the first
/// character's child, so an empty prefix yields an empty slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

impl PrefixIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name along the path of its lowercased characters
    ///
    /// An empty name touches no node and is not counted.
    pub fn insert(&mut self, name: &str) {
        let key = name.to_lowercase();
        if key.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
            node.names.push(name.to_string());
        }
        self.len += 1;
    }

    /// Names stored under `prefix` (case-insensitive)
    ///
    /// Returns an empty slice when no node matches.
    pub fn search_by_prefix(&self, prefix: &str) -> &[String] {
        let key = prefix.to_lowercase();
        key.chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))
            .map_or(&[][..], |node| node.names.as_slice())
    }

    /// Delete one occurrence of `name` and prune emptied nodes
    ///
    /// The exact string is removed when stored; otherwise the first stored
    /// name equal to it ignoring case. Returns `false` and leaves the index
    /// untouched when neither exists.
    pub fn delete(&mut self, name: &str) -> bool {
        let key = name.to_lowercase();
        let Some(target) = self.resolve(&key, name) else {
            return false;
        };

        // The root is never pruned, so its own flag is ignored.
        Self::remove_path(&mut self.root, key.chars(), &target);
        self.len -= 1;
        true
    }

    /// Check whether a name equal to `name` (ignoring case) is stored
    pub fn contains(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        self.resolve(&key, name).is_some()
    }

    /// Number of names stored, counting duplicates
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes below the root
    pub fn node_count(&self) -> usize {
        self.root.subtree_size() - 1
    }

    /// Remove every name and node
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.len = 0;
    }

    /// Find the stored string a delete of `name` should remove
    fn resolve(&self, key: &str, name: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }

        let terminal = key
            .chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))?;

        terminal
            .names
            .iter()
            .find(|stored| stored.as_str() == name)
            .or_else(|| terminal.names.iter().find(|stored| stored.to_lowercase() == key))
            .cloned()
    }

    /// Post-order removal along `chars`
    ///
    /// Each child drops one occurrence of `name` before recursing; after the
    /// deeper call reports back, the child is detached if it is left empty.
    /// Returns whether `node` itself is now prunable.
    fn remove_path(node: &mut TrieNode, mut chars: Chars<'_>, name: &str) -> bool {
        if let Some(ch) = chars.next() {
            if let Some(child) = node.children.get_mut(&ch) {
                child.remove_one(name);
                if Self::remove_path(child, chars, name) {
                    node.children.remove(&ch);
                }
            }
        }
        node.is_prunable()
    }
}

impl NameIndex for PrefixIndex {
    fn insert(&mut self, name: &str) {
        PrefixIndex::insert(self, name)
    }

    fn delete(&mut self, name: &str) -> bool {
        PrefixIndex::delete(self, name)
    }

    fn search_by_prefix(&self, prefix: &str) -> &[String] {
        PrefixIndex::search_by_prefix(self, prefix)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut index = Self::new();
        for name in iter {
            index.insert(name.as_ref());
        }
        index
    }
}
