use unicode_segmentation::UnicodeSegmentation;

/// Sentence segmentation and word tokenization for the probability models.
///
/// Must be deterministic, and the same tokenizer must be used for training and detection.
pub trait Tokenizer {
    fn sentences<'t>(&self, text: &'t str) -> Vec<Vec<&'t str>>;
}

/// Unicode sentence boundaries, then word bounds without whitespace.
/// Punctuation is kept as separate tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn sentences<'t>(&self, text: &'t str) -> Vec<Vec<&'t str>> {
        text.unicode_sentences()
            .map(|sentence| {
                sentence
                    .split_word_bounds()
                    .filter(|token| !token.trim().is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|tokens| !tokens.is_empty())
            .collect()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    #[inline]
    fn sentences<'t>(&self, text: &'t str) -> Vec<Vec<&'t str>> {
        (**self).sentences(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_and_words() {
        let sentences = UnicodeTokenizer.sentences("The fox runs. Le renard, brun!");
        assert_eq!(
            sentences,
            [
                vec!["The", "fox", "runs", "."],
                vec!["Le", "renard", ",", "brun", "!"],
            ]
        );
    }

    #[test]
    fn test_blank_text() {
        assert!(UnicodeTokenizer.sentences("").is_empty());
        assert!(UnicodeTokenizer.sentences("  \n ").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "Ça va? Oui, très bien.";
        assert_eq!(
            UnicodeTokenizer.sentences(text),
            UnicodeTokenizer.sentences(text)
        );
    }
}
