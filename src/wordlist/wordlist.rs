use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use delegate::delegate;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::error::{DictionaryError, TrieError};
use crate::wordlist::parse::{dictionary, Dictionary};
use crate::wordlist::trie::trie::Trie;

/// The words of a dictionary, in file order, and the trie built from them.
pub struct Wordlist {
    words: Vec<String>,
    trie: Trie,
}

#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct FileFormat {
    /// Reject words longer than this many characters.
    #[builder(default)]
    max_word_len: Option<usize>,
    /// Treat words after the declared count as an error instead of ignoring them.
    #[builder(default)]
    strict_count: bool,
}

impl FileFormat {
    fn check<'a>(&self, dict: Dictionary<'a>) -> Result<Vec<&'a str>, DictionaryError> {
        if !dict.extra.is_empty() {
            if self.strict_count {
                return Err(DictionaryError::ExtraWords { expected: dict.declared, extra: dict.extra.len() });
            }
            warn!(declared = dict.declared, ignored = dict.extra.len(),
                  "ignoring words past the declared count");
        }
        if let Some(max) = self.max_word_len {
            if let Some((index, word)) = dict.words.iter().enumerate()
                .find(|(_, w)| w.chars().count() > max) {
                return Err(DictionaryError::WordTooLong { index, word: word.to_string(), max });
            }
        }
        Ok(dict.words)
    }
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(path: P, format: FileFormat) -> Result<Wordlist> {
        let path = path.as_ref();
        info!(path = %path.display(), "reading words");

        let file = File::open(path)
            .with_context(|| format!("cannot open dictionary {}", path.display()))?;
        Self::from_reader(BufReader::new(file), format)
            .with_context(|| format!("cannot load dictionary {}", path.display()))
    }

    pub fn from_reader<R: Read>(mut reader: R, format: FileFormat) -> Result<Wordlist> {
        let start = Instant::now();
        let mut text = String::new();
        reader.read_to_string(&mut text).context("dictionary is not readable text")?;
        debug!(bytes = text.len(), elapsed = ?start.elapsed(), "read dictionary");

        let words = format.check(dictionary(&text)?)?;

        let start = Instant::now();
        let mut trie = Trie::new();
        for (index, word) in words.iter().enumerate() {
            trie.insert(word)
                .map_err(|source| DictionaryError::InvalidWord { index, source })?;
        }
        info!(words = words.len(), distinct = trie.len(), nodes = trie.node_count(),
              elapsed = ?start.elapsed(), "built trie");

        Ok(Wordlist {
            words: words.into_iter().map(str::to_string).collect(),
            trie,
        })
    }

    delegate! {
        to self.trie {
            pub fn occurrences(&self, word: &str) -> Result<usize, TrieError>;
            pub fn contains(&self, word: &str) -> bool;
        }
    }

    /// Dictionary words in the order they were read, duplicates included.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn into_trie(self) -> Trie {
        self.trie
    }
}
