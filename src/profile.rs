use crate::{
    ngrams::{everygrams, ngram_string},
    NgramOrder,
};
use ahash::AHashMap;
use compact_str::CompactString;
use itertools::Itertools;

/// Accumulates character ngram counts of one language.
///
/// Every order `1..=max_order` goes into one shared table.
/// Entries keep first-seen order, which is the rank tie-break.
#[derive(Clone, Debug)]
pub struct ProfileBuilder {
    max_order: NgramOrder,
    index: AHashMap<CompactString, usize>,
    entries: Vec<(CompactString, usize)>,
}

impl ProfileBuilder {
    #[inline]
    pub fn new(max_order: NgramOrder) -> Self {
        Self {
            max_order,
            index: AHashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn add_document(&mut self, document: &str) {
        let chars: Vec<char> = document.chars().collect();
        for ngram in everygrams(&chars, self.max_order.get()) {
            self.add_ngram(ngram_string(ngram), 1);
        }
    }

    #[inline]
    fn add_ngram(&mut self, ngram: CompactString, count: usize) {
        match self.index.get(&ngram) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(ngram.clone(), self.entries.len());
                self.entries.push((ngram, count));
            }
        }
    }

    #[inline]
    pub fn build(self) -> FrequencyProfile {
        FrequencyProfile {
            max_order: self.max_order,
            index: self.index,
            entries: self.entries,
        }
    }
}

/// Immutable ngram -> count table of one language
#[derive(Clone, Debug)]
pub struct FrequencyProfile {
    max_order: NgramOrder,
    index: AHashMap<CompactString, usize>,
    entries: Vec<(CompactString, usize)>,
}

impl FrequencyProfile {
    pub fn from_documents<'d>(
        documents: impl IntoIterator<Item = &'d str>,
        max_order: NgramOrder,
    ) -> Self {
        let mut builder = ProfileBuilder::new(max_order);
        for document in documents {
            builder.add_document(document);
        }
        builder.build()
    }

    /// Rebuilds a profile from `(ngram, count)` pairs listed in first-seen order.
    /// Repeated ngrams are merged.
    pub fn from_counts(
        max_order: NgramOrder,
        counts: impl IntoIterator<Item = (CompactString, usize)>,
    ) -> Self {
        let mut builder = ProfileBuilder::new(max_order);
        for (ngram, count) in counts {
            builder.add_ngram(ngram, count);
        }
        builder.build()
    }

    #[inline(always)]
    pub fn max_order(&self) -> NgramOrder {
        self.max_order
    }

    #[inline]
    pub fn count(&self, ngram: &str) -> usize {
        self.index.get(ngram).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct ngrams
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(ngram, count)` in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(ngram, count)| (ngram.as_str(), *count))
    }

    /// Top `max_size` ngrams by descending count.
    /// Equal counts keep first-seen order (the sort is stable).
    pub fn most_common(&self, max_size: usize) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .sorted_by(|(_, c1), (_, c2)| c2.cmp(c1))
            .take(max_size)
            .map(|(ngram, count)| (ngram.as_str(), *count))
    }

    pub fn rank_table(&self, max_size: usize) -> RankTable {
        let ngrams: Vec<CompactString> = self
            .most_common(max_size)
            .map(|(ngram, _)| CompactString::from(ngram))
            .collect();
        let ranks = ngrams
            .iter()
            .enumerate()
            .map(|(rank, ngram)| (ngram.clone(), rank))
            .collect();

        RankTable {
            max_size,
            ngrams,
            ranks,
        }
    }
}

/// Equal when the counts are equal, first-seen order is not compared.
impl PartialEq for FrequencyProfile {
    fn eq(&self, other: &Self) -> bool {
        self.max_order == other.max_order
            && self.len() == other.len()
            && self.iter().all(|(ngram, count)| other.count(ngram) == count)
    }
}

impl Eq for FrequencyProfile {}

/// Ngram -> 0-based rank of the top `max_size` ngrams of a profile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankTable {
    max_size: usize,
    ngrams: Vec<CompactString>,
    ranks: AHashMap<CompactString, usize>,
}

impl RankTable {
    #[inline(always)]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    #[inline]
    pub fn rank(&self, ngram: &str) -> Option<usize> {
        self.ranks.get(ngram).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ngrams.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }

    /// `(ngram, rank)` from the most frequent
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.ngrams
            .iter()
            .enumerate()
            .map(|(rank, ngram)| (ngram.as_str(), rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn order(n: usize) -> NgramOrder {
        NgramOrder::new(n).unwrap()
    }

    #[test]
    fn test_pooled_orders() {
        let profile = FrequencyProfile::from_documents(["abab"], order(2));
        let expected: AHashMap<&str, usize> = ahashmap!(
            "a" => 2,
            "b" => 2,
            "ab" => 2,
            "ba" => 1,
        );

        assert_eq!(profile.len(), expected.len());
        for (ngram, count) in expected {
            assert_eq!(profile.count(ngram), count, "{ngram}");
        }
        assert_eq!(profile.count("abab"), 0);
    }

    #[test]
    fn test_counts_across_documents() {
        let profile = FrequencyProfile::from_documents(["le chat", "le chien"], order(1));
        assert_eq!(profile.count("l"), 2);
        assert_eq!(profile.count("c"), 2);
        assert_eq!(profile.count(" "), 2);
        assert_eq!(profile.count("h"), 2);
        assert_eq!(profile.count("i"), 1);
    }

    #[rstest(
        documents,
        case(&["the quick fox", "jumps over", "the lazy dog"]),
        case(&["a", "", "aaa", "ab"]),
        case(&["le renard brun", "saute", "le chien paresseux"])
    )]
    fn test_order_independent(documents: &[&str]) {
        let forward = FrequencyProfile::from_documents(documents.iter().copied(), order(3));
        let backward = FrequencyProfile::from_documents(documents.iter().rev().copied(), order(3));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_rank_tie_first_seen() {
        // c=2, b=2, d=1, a=1 seen in order d, c, b, a
        let profile = FrequencyProfile::from_documents(["dcbcab"], order(1));
        let ranks = profile.rank_table(10);
        assert_eq!(
            ranks.iter().collect::<Vec<_>>(),
            [("c", 0), ("b", 1), ("d", 2), ("a", 3)]
        );
    }

    #[test]
    fn test_rank_table_truncated() {
        let profile = FrequencyProfile::from_documents(["aaabbc"], order(1));
        let ranks = profile.rank_table(2);
        assert_eq!(ranks.len(), 2);
        assert_eq!(ranks.max_size(), 2);
        assert_eq!(ranks.rank("a"), Some(0));
        assert_eq!(ranks.rank("b"), Some(1));
        assert_eq!(ranks.rank("c"), None);
    }

    #[test]
    fn test_from_counts_keeps_ranks() {
        let profile = FrequencyProfile::from_documents(["hello world"], order(2));
        let restored = FrequencyProfile::from_counts(
            profile.max_order(),
            profile.iter().map(|(g, c)| (CompactString::from(g), c)),
        );
        assert_eq!(restored, profile);
        assert_eq!(restored.rank_table(300), profile.rank_table(300));
    }

    #[test]
    fn test_empty_document() {
        let profile = FrequencyProfile::from_documents([""], order(3));
        assert!(profile.is_empty());
        assert!(profile.rank_table(5).is_empty());
    }
}
