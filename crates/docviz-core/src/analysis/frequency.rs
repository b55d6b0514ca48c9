//! Word frequency counting.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// A word and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Count items, keeping them in order of first occurrence.
pub(crate) fn count_in_order<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }
    counts
}

/// Keep the `k` largest counts. The sort is stable, so ties stay in
/// first-encountered order.
pub(crate) fn most_common<T>(mut counts: Vec<(T, usize)>, k: usize) -> Vec<(T, usize)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(k);
    counts
}

/// Top `k` whitespace tokens of `text` by count, descending.
pub fn word_frequencies(text: &str, k: usize) -> Vec<WordCount> {
    let counts = count_in_order(text.split_whitespace());
    most_common(counts, k)
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(counts: &[WordCount]) -> Vec<(&str, usize)> {
        counts.iter().map(|c| (c.word.as_str(), c.count)).collect()
    }

    #[test]
    fn test_cat_scenario() {
        let counts = word_frequencies("cat sat. cat ran.", 5);
        assert_eq!(pairs(&counts), vec![("cat", 2), ("sat.", 1), ("ran.", 1)]);
    }

    #[test]
    fn test_at_most_k_sorted_descending() {
        let text = "a b c d e a b c a b a";
        let counts = word_frequencies(text, 3);
        assert_eq!(counts.len(), 3);
        assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(pairs(&counts), vec![("a", 4), ("b", 3), ("c", 2)]);
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let counts = word_frequencies("zeta alpha mid alpha zeta omega", 10);
        assert_eq!(
            pairs(&counts),
            vec![("zeta", 2), ("alpha", 2), ("mid", 1), ("omega", 1)]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(word_frequencies("   \n ", 10).is_empty());
    }
}
