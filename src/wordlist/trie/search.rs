use crate::alphabet::slots;
use crate::error::TrieError;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// How many times `word` was inserted.
    ///
    /// Words that were never inserted, including strict prefixes of stored
    /// words, give `Ok(0)`. Nothing is allocated on lookup.
    pub fn occurrences(&self, word: &str) -> Result<usize, TrieError> {
        Ok(self.get_node(word)?
            .map(|node| node.terminal_count)
            .unwrap_or(0))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.occurrences(word).map(|n| n > 0).unwrap_or(false)
    }

    fn get_node(&self, word: &str) -> Result<Option<&TrieNode>, TrieError> {
        let mut current = &self.root;
        for idx in slots(word)? {
            match current.get_child(idx) {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }
}
