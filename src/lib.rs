pub mod alphabet;
pub mod error;
pub mod wordlist;

pub use crate::error::{DictionaryError, TrieError};
pub use crate::wordlist::index::Index;
pub use crate::wordlist::trie::trie::{destroy, Trie};
pub use crate::wordlist::wordlist::{FileFormat, Wordlist};
