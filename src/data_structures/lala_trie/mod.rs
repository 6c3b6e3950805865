// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lala Trie Implementation
//!
//! An in-memory prefix tree mapping character keys to values. Keys sharing a
//! leading run of symbols share the same chain of nodes; deleting a key prunes
//! the dead branch it leaves behind without disturbing sibling paths.
//!
//! # Example
//!
//! ```
//! use lala_lib::data_structures::lala_trie::{LalaTrie, LalaTrieError};
//!
//! let mut trie = LalaTrie::new();
//! trie.insert("and", 0).unwrap();
//! trie.insert("andromeda", 4).unwrap();
//!
//! assert_eq!(trie.search("andromeda"), Ok(&4));
//! assert!(matches!(trie.search("andro"), Err(LalaTrieError::NotFound(_))));
//!
//! trie.delete("and").unwrap();
//! assert_eq!(trie.search("andromeda"), Ok(&4));
//! ```

mod error;
mod node;
mod traverse;

#[cfg(test)]
mod tests;

use std::fmt;

pub use error::LalaTrieError;
pub use traverse::{Traverse, Visit};
use node::TrieNode;

/// Result type for Lala Trie operations
pub type LalaTrieResult<T> = Result<T, LalaTrieError>;

/// A prefix tree keyed by `char` sequences.
///
/// All mutation goes through `&mut self`, so a trie shared across threads
/// needs an external lock around the whole structure.
#[derive(Debug, Clone)]
pub struct LalaTrie<V> {
    /// The root node; never terminal, its symbol is unused
    root: TrieNode<V>,

    /// Number of terminal nodes
    len: usize,
}

/// Where a successful delete has to cut the tree.
struct Removal {
    /// Child index taken at each level on the way down to the key's node
    path: Vec<usize>,

    /// Depth of the last ancestor that must survive the delete
    keep_depth: usize,

    /// The key's node still has children and is only demoted
    demote: bool,
}

impl<V> LalaTrie<V> {
    /// Creates a new empty `LalaTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
            len: 0,
        }
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// Existing nodes are followed as far as they match the key; a fresh chain
    /// is created for the uncovered suffix. Inserting an existing key replaces
    /// its value.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(V))` - The value previously stored under `key`.
    /// * `Ok(None)` - The key was not present before.
    /// * `Err(LalaTrieError::EmptyKey)` - If `key` has no symbols.
    pub fn insert<K>(&mut self, key: K, value: V) -> LalaTrieResult<Option<V>>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(LalaTrieError::EmptyKey);
        }

        let mut symbols = key.chars().peekable();
        let mut node = &mut self.root;

        while let Some(&symbol) = symbols.peek() {
            match node.child_index(symbol) {
                Some(index) => {
                    node = &mut node.children[index];
                    symbols.next();
                }
                None => break,
            }
        }

        let mut created = 0usize;
        for symbol in symbols {
            node.children.push(TrieNode::new(symbol));
            let last = node.children.len() - 1;
            node = &mut node.children[last];
            created += 1;
        }

        let previous = node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }

        tracing::debug!(key, created, replaced = previous.is_some(), "inserted key");
        Ok(previous)
    }

    /// Looks up the value stored for `key`.
    ///
    /// A key that only exists as a prefix of longer keys is not found.
    pub fn search<K>(&self, key: K) -> LalaTrieResult<&V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        self.find_node(key)
            .and_then(|node| node.value.as_ref())
            .ok_or_else(|| {
                tracing::trace!(key, "search miss");
                LalaTrieError::NotFound(key.to_owned())
            })
    }

    /// Replaces the value of an existing key in place.
    ///
    /// # Returns
    ///
    /// * `Ok(V)` - The value that was replaced.
    /// * `Err(LalaTrieError::NotFound)` - Under the same conditions as [`search`](Self::search).
    pub fn update<K>(&mut self, key: K, value: V) -> LalaTrieResult<V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        match self.find_node_mut(key).and_then(|node| node.value.as_mut()) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(LalaTrieError::NotFound(key.to_owned())),
        }
    }

    /// Removes a key from the trie and returns its value.
    ///
    /// If the key's node still leads to other keys it is only demoted.
    /// Otherwise the dead branch is cut below the nearest ancestor that either
    /// branches or terminates another key. A failed lookup leaves the trie
    /// untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(V)` - The removed value.
    /// * `Err(LalaTrieError::EmptyKey)` - If `key` has no symbols.
    /// * `Err(LalaTrieError::NotFound)` - If the key is absent or only a prefix.
    pub fn delete<K>(&mut self, key: K) -> LalaTrieResult<V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(LalaTrieError::EmptyKey);
        }

        let removal = self
            .plan_removal(key)
            .ok_or_else(|| LalaTrieError::NotFound(key.to_owned()))?;

        let value = if removal.demote {
            tracing::debug!(key, "demoted branch node");
            self.node_at_mut(&removal.path).value.take()
        } else {
            let edge = removal.path[removal.keep_depth];
            let parent = self.node_at_mut(&removal.path[..removal.keep_depth]);
            let detached = parent.children.swap_remove(edge);
            tracing::debug!(
                key,
                pruned = removal.path.len() - removal.keep_depth,
                "pruned dead branch"
            );
            detached.into_chain_value()
        };

        let value = value.ok_or_else(|| LalaTrieError::NotFound(key.to_owned()))?;
        self.len -= 1;
        Ok(value)
    }

    /// Checks if a key exists in the trie.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.search(key).is_ok()
    }

    /// Returns the number of keys stored in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.traverse().count()
    }

    /// Removes every key, leaving a bare root.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
        self.len = 0;
    }

    /// Lazily walks every node in depth-first pre-order.
    pub fn traverse(&self) -> Traverse<'_, V> {
        Traverse::new(&self.root)
    }

    /// Renders the tree one node per line, indenting `indent_width` spaces per level.
    pub fn display(&self, indent_width: usize) -> TrieDisplay<'_, V> {
        TrieDisplay {
            trie: self,
            indent_width,
        }
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode<V>> {
        key.chars().try_fold(&self.root, |node, symbol| node.child(symbol))
    }

    fn find_node_mut(&mut self, key: &str) -> Option<&mut TrieNode<V>> {
        key.chars().try_fold(&mut self.root, |node, symbol| {
            let index = node.child_index(symbol)?;
            Some(&mut node.children[index])
        })
    }

    fn node_at_mut(&mut self, path: &[usize]) -> &mut TrieNode<V> {
        path.iter()
            .fold(&mut self.root, |node, &index| &mut node.children[index])
    }

    /// Walks `key` once, recording the edges taken and the last ancestor worth keeping.
    ///
    /// Every ancestor seen here sits at a non-final position, so its own
    /// terminal flag always marks a different, shorter key.
    fn plan_removal(&self, key: &str) -> Option<Removal> {
        let mut path = Vec::with_capacity(key.len());
        let mut keep_depth = 0;
        let mut lookup = &self.root;

        for (depth, symbol) in key.chars().enumerate() {
            if lookup.children.len() > 1 || lookup.is_terminal() {
                keep_depth = depth;
            }
            let index = lookup.child_index(symbol)?;
            path.push(index);
            lookup = &lookup.children[index];
        }

        if !lookup.is_terminal() {
            return None;
        }

        Some(Removal {
            path,
            keep_depth,
            demote: !lookup.children.is_empty(),
        })
    }
}

impl<V> Default for LalaTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Indented text view of a trie, see [`LalaTrie::display`].
#[derive(Debug)]
pub struct TrieDisplay<'a, V> {
    trie: &'a LalaTrie<V>,
    indent_width: usize,
}

impl<V: fmt::Display> fmt::Display for TrieDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in self.trie.traverse() {
            let pad = self.indent_width * (visit.depth - 1);
            match visit.value {
                Some(value) => writeln!(f, "{:pad$}{}: {}", "", visit.symbol, value)?,
                None => writeln!(f, "{:pad$}{}", "", visit.symbol)?,
            }
        }
        Ok(())
    }
}

impl<V: fmt::Display> fmt::Display for LalaTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(1), f)
    }
}
