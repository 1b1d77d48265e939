use compact_str::CompactString;

/// Slides a window of width `n` over `sequence` with stride 1, no padding.
///
/// Produces `max(0, len - n + 1)` ngrams, nothing when `n == 0`.
#[inline]
pub fn ngrams<T>(sequence: &[T], n: usize) -> impl Iterator<Item = &[T]> + Clone {
    let sequence = if n == 0 { &sequence[..0] } else { sequence };
    sequence.windows(n.max(1))
}

/// All ngrams of orders `1..=max_order`, lower orders first.
#[inline]
pub fn everygrams<T>(sequence: &[T], max_order: usize) -> impl Iterator<Item = &[T]> {
    (1..=max_order).flat_map(move |n| ngrams(sequence, n))
}

/// Character ngram as an owned string key.
/// An ngram of order `k` has exactly `k` chars, so orders never collide in one table.
#[inline(always)]
pub(crate) fn ngram_string(chars: &[char]) -> CompactString {
    chars.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest(
        text,
        n,
        expected,
        case("abcd", 1, &["a", "b", "c", "d"]),
        case("abcd", 2, &["ab", "bc", "cd"]),
        case("abcd", 4, &["abcd"]),
        case("abcd", 5, &[]),
        case("abcd", 0, &[]),
        case("", 1, &[]),
        case("él", 2, &["él"])
    )]
    fn test_char_ngrams(text: &str, n: usize, expected: &[&str]) {
        let chars: Vec<char> = text.chars().collect();
        let result: Vec<_> = ngrams(&chars, n).map(ngram_string).collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_ngram_count() {
        let tokens = ["a", "b", "c", "d", "e"];
        for n in 1..=7 {
            assert_eq!(
                ngrams(&tokens, n).count(),
                (tokens.len() + 1).saturating_sub(n)
            );
        }
    }

    #[test]
    fn test_ngrams_keep_order() {
        let tokens = ["to", "be", "or"];
        let result: Vec<_> = ngrams(&tokens, 2).collect();
        assert_eq!(result, [&["to", "be"][..], &["be", "or"][..]]);
        assert_ne!(result[0], &["be", "to"][..]);
    }

    #[test]
    fn test_everygrams() {
        let chars: Vec<char> = "abc".chars().collect();
        let result: Vec<_> = everygrams(&chars, 3).map(ngram_string).collect();
        assert_eq!(result, ["a", "b", "c", "ab", "bc", "abc"]);
    }
}
