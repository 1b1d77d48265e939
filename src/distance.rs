//! Out-of-place measure between ngram rankings.
//!
//! The measure is directional: only the sample's top ngrams are walked,
//! so `distance(a, b)` and `distance(b, a)` generally differ.
//! Reference ngrams missing from the sample cost nothing.

use crate::profile::{FrequencyProfile, RankTable};

/// Distance from a sample profile to a reference ranking.
///
/// The sample is ranked with the same `max_size` first.
#[inline]
pub fn distance(sample: &FrequencyProfile, reference: &RankTable, max_size: usize) -> usize {
    rank_distance(&sample.rank_table(max_size), reference, max_size)
}

/// Sums `|reference_rank - sample_rank|` over the sample's top `max_size` ngrams,
/// adding `max_size` for every ngram out of the reference's top `max_size`.
pub fn rank_distance(sample: &RankTable, reference: &RankTable, max_size: usize) -> usize {
    sample
        .iter()
        .take(max_size)
        .map(|(ngram, sample_rank)| {
            reference
                .rank(ngram)
                .filter(|&rank| rank < max_size)
                .map_or(max_size, |reference_rank| reference_rank.abs_diff(sample_rank))
        })
        .sum()
}
