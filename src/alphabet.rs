use crate::error::TrieError;

pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Slot of `c` in a node's child array, or `None` outside `a`-`z`.
pub fn slot_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

pub fn letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

/// Checks that `word` is non-empty and spelled only with `a`-`z`.
pub fn validate(word: &str) -> Result<(), TrieError> {
    if word.is_empty() {
        return Err(TrieError::EmptyWord);
    }
    match word.chars().enumerate().find(|(_, c)| slot_index(*c).is_none()) {
        None => Ok(()),
        Some((position, character)) => Err(TrieError::InvalidCharacter {
            word: word.to_string(),
            character,
            position,
        }),
    }
}

/// Validates `word` and yields the slot index of each of its letters.
pub fn slots(word: &str) -> Result<impl Iterator<Item = usize> + '_, TrieError> {
    validate(word)?;
    Ok(word.bytes().map(|b| (b - b'a') as usize))
}
