pub mod trie;
pub mod index;
pub mod parse;
pub mod wordlist;
