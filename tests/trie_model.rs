use std::collections::HashMap;

use dictrie::{destroy, Index, Trie};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-e]{1,6}"
}

proptest! {
    #[test]
    fn trie_matches_counting_map(words in prop::collection::vec(word(), 0..200),
                                 probes in prop::collection::vec(word(), 1..50)) {
        let mut model: HashMap<String, usize> = HashMap::new();
        let mut trie = Trie::new();

        for w in &words {
            trie.insert(w).unwrap();
            *model.entry(w.clone()).or_insert(0) += 1;
        }

        for w in words.iter().chain(probes.iter()) {
            prop_assert_eq!(trie.occurrences(w), Ok(*model.get(w).unwrap_or(&0)), "word {}", w);
        }
        prop_assert_eq!(trie.len(), model.len());
        prop_assert_eq!(trie.total(), words.len());
    }

    #[test]
    fn insertion_order_does_not_change_counts(mut words in prop::collection::vec(word(), 1..100)) {
        let mut forward = Trie::new();
        forward.add_all(words.iter().map(String::as_str)).unwrap();

        words.reverse();
        let mut backward = Trie::new();
        backward.add_all(words.iter().map(String::as_str)).unwrap();

        prop_assert_eq!(forward.iter().collect::<Vec<_>>(), backward.iter().collect::<Vec<_>>());
        prop_assert_eq!(forward.node_count(), backward.node_count());
    }

    #[test]
    fn later_words_leave_earlier_counts_alone(first in word(), second in word()) {
        prop_assume!(first != second);
        let mut trie = Trie::new();
        trie.insert(&first).unwrap();
        trie.insert(&second).unwrap();
        prop_assert_eq!(trie.occurrences(&first), Ok(1));
    }

    #[test]
    fn strict_prefixes_are_not_words(w in "[a-z]{2,12}") {
        let mut trie = Trie::new();
        trie.insert(&w).unwrap();
        for end in 1..w.len() {
            prop_assert_eq!(trie.occurrences(&w[..end]), Ok(0));
        }
    }

    #[test]
    fn destroy_releases_all_nodes(words in prop::collection::vec(word(), 0..100)) {
        let mut trie = Trie::new();
        trie.add_all(words.iter().map(String::as_str)).unwrap();
        let nodes = trie.node_count();
        prop_assert_eq!(trie.destroy(), nodes);
    }

    #[test]
    fn bad_words_are_rejected(w in "[a-z]{0,4}[^a-z][a-z]{0,4}") {
        let mut trie = Trie::new();
        prop_assert!(trie.insert(&w).is_err());
        prop_assert!(trie.occurrences(&w).is_err());
        prop_assert_eq!(trie.node_count(), 1);
    }
}

#[test]
fn destroy_handle_twice() {
    let mut trie = Trie::new();
    trie.insert("cat").unwrap();
    let handle = destroy(Some(trie));
    assert!(destroy(handle).is_none());
    assert!(destroy(None).is_none());
}
