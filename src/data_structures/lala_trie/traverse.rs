// Copyright (c) 2026 Lala Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Depth-first diagnostic traversal of the Lala Trie.

use serde::Serialize;

use super::node::TrieNode;

/// A single node as seen by [`Traverse`].
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Visit<'a, V> {
    /// Label of the edge leading into the node.
    pub symbol: char,

    /// Stored value, present only on terminal nodes.
    pub value: Option<&'a V>,

    /// Path length from the root; first-level nodes have depth 1.
    pub depth: usize,
}

impl<V> Clone for Visit<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Visit<'_, V> {}

/// Lazy pre-order iterator over every non-root node of a trie.
///
/// Children are visited in their storage order. The iterator holds an explicit
/// stack, so deep tries do not recurse.
#[derive(Debug)]
pub struct Traverse<'a, V> {
    stack: Vec<(&'a TrieNode<V>, usize)>,
}

impl<'a, V> Traverse<'a, V> {
    pub(crate) fn new(root: &'a TrieNode<V>) -> Self {
        let mut traverse = Self {
            stack: Vec::with_capacity(root.children.len()),
        };
        traverse.push_children(root, 1);
        traverse
    }

    fn push_children(&mut self, node: &'a TrieNode<V>, depth: usize) {
        // Reversed so the first child is popped first.
        self.stack
            .extend(node.children.iter().rev().map(|child| (child, depth)));
    }
}

impl<V> Clone for Traverse<'_, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, V> Iterator for Traverse<'a, V> {
    type Item = Visit<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.push_children(node, depth + 1);
        Some(Visit {
            symbol: node.symbol,
            value: node.value.as_ref(),
            depth,
        })
    }
}

impl<V> std::iter::FusedIterator for Traverse<'_, V> {}
