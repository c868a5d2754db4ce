use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input the trie refuses to store or look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    EmptyWord,
    InvalidCharacter {
        word: String,
        character: char,
        position: usize,
    },
    /// Adding to the word's count would overflow the trie's total.
    CountOverflow { word: String },
}

impl Display for TrieError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TrieError::EmptyWord => write!(f, "empty word"),
            TrieError::InvalidCharacter { word, character, position } =>
                write!(f, "{:?} contains {:?} at position {}, only a-z are allowed",
                       word, character, position),
            TrieError::CountOverflow { word } =>
                write!(f, "count for {:?} would overflow", word),
        }
    }
}

impl Error for TrieError {}

#[derive(Debug, PartialEq, Eq)]
pub enum DictionaryError {
    /// The leading word count is missing or not a number.
    BadHeader,
    Truncated { expected: usize, found: usize },
    ExtraWords { expected: usize, extra: usize },
    WordTooLong { index: usize, word: String, max: usize },
    InvalidWord { index: usize, source: TrieError },
}

impl Display for DictionaryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::BadHeader =>
                write!(f, "dictionary must start with a word count"),
            DictionaryError::Truncated { expected, found } =>
                write!(f, "dictionary declares {} words but only {} were found", expected, found),
            DictionaryError::ExtraWords { expected, extra } =>
                write!(f, "dictionary declares {} words but has {} more", expected, extra),
            DictionaryError::WordTooLong { index, word, max } =>
                write!(f, "word #{} ({:?}) is longer than {} characters", index, word, max),
            DictionaryError::InvalidWord { index, source } =>
                write!(f, "word #{} is invalid: {}", index, source),
        }
    }
}

impl Error for DictionaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DictionaryError::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}
