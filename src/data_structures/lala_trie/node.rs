// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lala Trie.
//!
//! Each node owns its children outright. There are no parent pointers; any
//! ancestor bookkeeping is done by the caller while descending.
//!
//! Depth equals key length, so `Drop`, `Clone` and `Debug` are written
//! without recursion.

use std::fmt;

/// A node in the Lala Trie.
///
/// A node is terminal exactly when it holds a value.
pub(crate) struct TrieNode<V> {
    /// Label of the edge leading into this node. Unused on the root.
    pub symbol: char,

    /// Child nodes in insertion order; symbols are unique among siblings.
    pub children: Vec<TrieNode<V>>,

    /// Value stored for the key ending here.
    pub value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates the root node.
    pub fn root() -> Self {
        Self::new('\0')
    }

    /// Creates a non-terminal, childless node reached through `symbol`.
    pub fn new(symbol: char) -> Self {
        Self {
            symbol,
            children: Vec::new(),
            value: None,
        }
    }

    /// Whether a stored key ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// Position of the child reached through `symbol`, if any.
    #[inline]
    pub fn child_index(&self, symbol: char) -> Option<usize> {
        self.children.iter().position(|child| child.symbol == symbol)
    }

    /// The child reached through `symbol`, if any.
    pub fn child(&self, symbol: char) -> Option<&TrieNode<V>> {
        self.children.iter().find(|child| child.symbol == symbol)
    }

    /// Consumes a single-child chain and returns the value at its end.
    ///
    /// Only meaningful on a subtree detached by pruning, where every node
    /// has at most one child and the last one is terminal.
    pub fn into_chain_value(self) -> Option<V> {
        let mut node = self;
        while let Some(child) = node.children.pop() {
            node = child;
        }
        node.value.take()
    }
}

impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        // Each popped node has its children moved out before it is dropped.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// A node being copied, with the index of its next child to visit.
struct CloneFrame<'a, V> {
    source: &'a TrieNode<V>,
    next: usize,
    copy: TrieNode<V>,
}

impl<'a, V: Clone> CloneFrame<'a, V> {
    fn new(source: &'a TrieNode<V>) -> Self {
        Self {
            source,
            next: 0,
            copy: TrieNode {
                symbol: source.symbol,
                children: Vec::with_capacity(source.children.len()),
                value: source.value.clone(),
            },
        }
    }
}

impl<V: Clone> Clone for TrieNode<V> {
    fn clone(&self) -> Self {
        let mut frames = vec![CloneFrame::new(self)];
        let mut finished = None;

        while let Some(frame) = frames.last_mut() {
            let source = frame.source;
            if let Some(child) = source.children.get(frame.next) {
                frame.next += 1;
                frames.push(CloneFrame::new(child));
            } else if let Some(done) = frames.pop() {
                match frames.last_mut() {
                    Some(parent) => parent.copy.children.push(done.copy),
                    None => finished = Some(done.copy),
                }
            }
        }

        finished.unwrap_or_else(|| CloneFrame::new(self).copy)
    }
}

impl<V: fmt::Debug> fmt::Debug for TrieNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("symbol", &self.symbol)
            .field("children", &self.children.len())
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = TrieNode::<u32>::new('a');
        assert_eq!(node.symbol, 'a');
        assert!(!node.is_terminal());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_child_lookup() {
        let mut node = TrieNode::<u32>::root();
        node.children.push(TrieNode::new('x'));
        node.children.push(TrieNode::new('y'));

        assert_eq!(node.child_index('y'), Some(1));
        assert_eq!(node.child_index('z'), None);
        assert_eq!(node.child('x').map(|c| c.symbol), Some('x'));
    }

    #[test]
    fn test_into_chain_value() {
        let mut leaf = TrieNode::new('c');
        leaf.value = Some(7);
        let mut mid = TrieNode::new('b');
        mid.children.push(leaf);
        let mut top = TrieNode::new('a');
        top.children.push(mid);

        assert_eq!(top.into_chain_value(), Some(7));
    }

    fn chain(length: usize) -> TrieNode<u32> {
        let mut root = TrieNode::root();
        let mut node = &mut root;
        for _ in 0..length {
            node.children.push(TrieNode::new('a'));
            node = &mut node.children[0];
        }
        node.value = Some(1);
        root
    }

    #[test]
    fn test_clone_keeps_shape_and_order() {
        let mut root = TrieNode::root();
        let mut a = TrieNode::new('a');
        a.children.push(TrieNode::new('b'));
        a.children.push(TrieNode::new('c'));
        a.children[1].value = Some(3);
        root.children.push(a);
        root.children.push(TrieNode::new('d'));
        root.children[1].value = Some(4);

        let copy = root.clone();
        assert_eq!(copy.children.len(), 2);
        assert_eq!(copy.children[0].symbol, 'a');
        let symbols: Vec<char> = copy.children[0].children.iter().map(|c| c.symbol).collect();
        assert_eq!(symbols, vec!['b', 'c']);
        assert_eq!(copy.children[0].children[1].value, Some(3));
        assert_eq!(copy.children[1].value, Some(4));
    }

    #[test]
    fn test_deep_chain_clone_and_drop() {
        let root = chain(100_000);
        let copy = root.clone();
        drop(root);
        assert_eq!(copy.into_chain_value(), Some(1));
    }
}
