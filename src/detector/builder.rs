use super::{Detector, Mode, ModelsStorage};
use crate::tokenizer::{Tokenizer, UnicodeTokenizer};
use ahash::AHashSet;

#[derive(Clone, Debug)]
pub struct DetectorBuilder<'m, T: Tokenizer> {
    pub(super) models_storage: &'m ModelsStorage,
    pub(super) mode: Mode,
    pub(super) languages: Option<AHashSet<String>>,
    pub(super) tokenizer: T,
}

impl<'m> DetectorBuilder<'m, UnicodeTokenizer> {
    /// Will have all languages of the storage, [`Mode::default`]
    #[inline]
    pub fn new(models_storage: &'m ModelsStorage) -> Self {
        Self {
            models_storage,
            mode: Mode::default(),
            languages: None,
            tokenizer: UnicodeTokenizer,
        }
    }
}

impl<'m, T: Tokenizer> DetectorBuilder<'m, T> {
    #[inline]
    pub fn build(self) -> Detector<'m, T> {
        Detector::new(self)
    }

    #[inline]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Only these languages will be scored. Labels missing from the storage are ignored.
    #[inline]
    pub fn languages<L: Into<String>>(mut self, languages: impl IntoIterator<Item = L>) -> Self {
        self.languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    /// Change tokenizer, it must be the one the models were trained with
    #[inline]
    pub fn tokenizer<T2: Tokenizer>(self, tokenizer: T2) -> DetectorBuilder<'m, T2> {
        DetectorBuilder {
            models_storage: self.models_storage,
            mode: self.mode,
            languages: self.languages,
            tokenizer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DetectorBuilder;
    use crate::{Corpus, Document, Estimator, Mode, ModelsStorage, NgramOrder};

    fn storage() -> ModelsStorage {
        let corpus: Corpus = [
            Document::new("en", "the fox"),
            Document::new("fr", "le renard"),
            Document::new("de", "der fuchs"),
        ]
        .into_iter()
        .collect();
        ModelsStorage::train(&corpus, NgramOrder::UNI, Estimator::Mle)
    }

    #[test]
    fn test_build() {
        let storage = storage();
        let detector = DetectorBuilder::new(&storage).build();
        assert_eq!(detector.languages().collect::<Vec<_>>(), ["de", "en", "fr"]);
        assert_eq!(detector.mode(), Mode::default());

        let detector = DetectorBuilder::new(&storage)
            .mode(Mode::Perplexity)
            .languages(["fr", "en", "xx"])
            .build();
        assert_eq!(detector.languages().collect::<Vec<_>>(), ["en", "fr"]);
        assert_eq!(detector.mode(), Mode::Perplexity);

        let detector = DetectorBuilder::new(&storage)
            .languages(Vec::<String>::new())
            .build();
        assert_eq!(detector.languages().count(), 0);
    }
}
