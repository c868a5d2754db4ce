use std::fmt::{Debug, Formatter};

use crate::alphabet::{letter, ALPHABET};

#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    /// Number of times the word ending here was inserted; 0 if this node is only a prefix.
    pub(crate) terminal_count: usize,
}

impl TrieNode {
    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal_count > 0
    }

    pub(crate) fn get_child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    /// Returns the child in slot `idx`, creating it if the slot is empty.
    /// The flag is true when a node was allocated.
    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> (&mut TrieNode, bool) {
        let created = self.children[idx].is_none();
        let child = self.children[idx].get_or_insert_with(Default::default);
        (&mut **child, created)
    }

    /// Present children with the letter of their slot, in alphabetical order.
    pub(crate) fn iter_children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter()
            .enumerate()
            .filter_map(|(idx, child)| child.as_deref().map(|c| (letter(idx), c)))
    }

    /// Moves every owned child out, leaving all 26 slots empty.
    pub(crate) fn take_children(&mut self) -> impl Iterator<Item = Box<TrieNode>> + '_ {
        self.children.iter_mut().filter_map(Option::take)
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("terminal_count", &self.terminal_count)
            .field("children", &self.iter_children()
                .map(|(c, _)| c)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
