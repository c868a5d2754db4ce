use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

/// Every stored word with its count, in lexicographic order.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<(String, &'a TrieNode)>,
}

impl<'a> Iterator for Words<'a> {
    type Item = (String, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            for (c, child) in node.iter_children().rev() {
                let mut child_path = path.clone();
                child_path.push(c);
                self.stack.push((child_path, child));
            }
            if node.is_terminal() {
                return Some((path, node.terminal_count));
            }
        }
        None
    }
}

impl Trie {
    pub fn iter(&self) -> Words<'_> {
        Words { stack: vec![(String::new(), &self.root)] }
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = (String, usize);
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
