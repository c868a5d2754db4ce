use std::fmt::{Debug, Formatter};

use tracing::{debug, trace};

use crate::alphabet::slots;
use crate::error::TrieError;
use crate::wordlist::index::Index;
use crate::wordlist::trie::node::TrieNode;

/// Prefix tree over `a`-`z` that counts how many times each word was inserted.
pub struct Trie {
    pub(crate) root: TrieNode,
    node_count: usize,
    distinct: usize,
    total: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: Default::default(),
            node_count: 1,
            distinct: 0,
            total: 0,
        }
    }

    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        self.insert_n(word, 1)
    }

    /// Inserts `word` as if it had been inserted `n` times.
    ///
    /// The word is validated before anything is allocated, so a rejected word
    /// leaves the tree untouched. With `n == 0` the word is only validated.
    pub fn insert_n(&mut self, word: &str, n: usize) -> Result<(), TrieError> {
        let slots = slots(word)?;
        if n == 0 {
            return Ok(());
        }
        // Every count is bounded by the total, so this also guards the word's own count.
        let total = self.total.checked_add(n)
            .ok_or_else(|| TrieError::CountOverflow { word: word.to_string() })?;

        let mut current = &mut self.root;
        let mut created = 0;
        for idx in slots {
            let (child, was_created) = current.get_or_create_child(idx);
            if was_created {
                created += 1;
            }
            current = child;
        }

        if !current.is_terminal() {
            self.distinct += 1;
        }
        current.terminal_count += n;
        self.total = total;
        self.node_count += created;
        trace!(word, created, count = current.terminal_count, "inserted");
        Ok(())
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.distinct
    }

    pub fn is_empty(&self) -> bool {
        self.distinct == 0
    }

    /// Sum of the occurrence counts of every stored word.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Nodes currently owned by the trie, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Releases every node and returns how many were released.
    pub fn destroy(mut self) -> usize {
        self.release()
    }

    // Post-order teardown with an explicit stack. A node is dropped only once
    // all 26 of its slots are empty, so dropping never recurses.
    fn release(&mut self) -> usize {
        if self.node_count == 0 {
            return 0;
        }
        let mut released = 0;
        let mut stack: Vec<Box<TrieNode>> = self.root.take_children().collect();
        while let Some(mut node) = stack.pop() {
            let children: Vec<Box<TrieNode>> = node.take_children().collect();
            if children.is_empty() {
                released += 1;
                drop(node);
            } else {
                stack.push(node);
                stack.extend(children);
            }
        }
        self.root.terminal_count = 0;
        released += 1;

        debug_assert_eq!(released, self.node_count);
        self.node_count = 0;
        self.distinct = 0;
        self.total = 0;
        released
    }
}

impl Drop for Trie {
    fn drop(&mut self) {
        self.release();
    }
}

/// Destroys the trie behind `handle`, if any, and returns the now empty handle.
///
/// Destroying an empty handle does nothing, so calling this twice is harmless.
pub fn destroy(handle: Option<Trie>) -> Option<Trie> {
    if let Some(trie) = handle {
        let released = trie.destroy();
        debug!(released, "destroyed trie");
    }
    None
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> Result<(), TrieError> {
        self.insert(word)
    }

    fn occurrences(&self, word: &str) -> Result<usize, TrieError> {
        Trie::occurrences(self, word)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
