use crate::error::TrieError;

pub trait Index {
    fn add(&mut self, word: &str) -> Result<(), TrieError>;
    fn occurrences(&self, word: &str) -> Result<usize, TrieError>;

    fn contains(&self, word: &str) -> bool {
        self.occurrences(word).map(|n| n > 0).unwrap_or(false)
    }

    /// Adds every item in order, stopping at the first rejected word.
    fn add_all<'a, I>(&mut self, items: I) -> Result<(), TrieError>
        where I: IntoIterator<Item = &'a str> {
        items.into_iter().try_for_each(|x| self.add(x))
    }
}
