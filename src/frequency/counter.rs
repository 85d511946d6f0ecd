use crate::frequency::table::{FrequencyTable, NGramCount};
use std::collections::{BTreeSet, HashMap};

/// Counts every contiguous `n`-token window of `tokens`
///
/// Windows are joined with a single space. The result lists each distinct
/// n-gram once, in the order of its first occurrence. There are
/// `tokens.len() - n + 1` windows (none when `n` is 0 or exceeds the number
/// of tokens).
pub fn count_ngrams(tokens: &[String], n: usize) -> Vec<NGramCount> {
    if n == 0 {
        return Vec::new();
    }

    let mut counts: Vec<NGramCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for window in tokens.windows(n) {
        let ngram = window.join(" ");
        match index.get(&ngram) {
            Some(&position) => counts[position].count += 1,
            None => {
                index.insert(ngram.clone(), counts.len());
                counts.push(NGramCount { ngram, count: 1 });
            }
        }
    }

    counts
}

/// Computes the `k` most frequent n-grams for every length in `lengths`
///
/// Within a length, n-grams are ordered by descending count; ties keep the
/// order in which the n-grams first appeared. When `tokens` is empty the
/// table is empty, with no entry for any length. A length of 0 is ignored.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use wordfreq_crawler::frequency::top_k;
///
/// let tokens: Vec<String> = ["This", "is", "URL2"].repeat(3).into_iter().map(String::from).collect();
/// let table = top_k(&tokens, &BTreeSet::from([2]), 10);
///
/// let pairs: Vec<_> = table.get(2).unwrap().iter().map(|c| (c.ngram.as_str(), c.count)).collect();
/// assert_eq!(pairs, vec![("This is", 3), ("is URL2", 3), ("URL2 This", 2)]);
/// ```
pub fn top_k(tokens: &[String], lengths: &BTreeSet<usize>, k: usize) -> FrequencyTable {
    let mut table = FrequencyTable::new();

    if tokens.is_empty() {
        return table;
    }

    for &n in lengths.iter().filter(|&&n| n > 0) {
        let mut counts = count_ngrams(tokens, n);
        // sort_by is stable, so equal counts stay in first-seen order
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(k);
        table.insert(n, counts);
    }

    table
}
