pub mod trie;
pub mod iterators;

mod node;
mod search;
