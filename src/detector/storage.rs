use crate::{
    corpus::preprocess,
    lm::{Estimator, NgramModel},
    profile::FrequencyProfile,
    tokenizer::{Tokenizer, UnicodeTokenizer},
    Corpus, NgramOrder,
};
use ::std::collections::BTreeMap;
#[cfg(not(target_family = "wasm"))]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Trained models of one language
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageModel {
    pub profile: FrequencyProfile,
    pub ngram_model: NgramModel,
}

impl LanguageModel {
    /// Builds the character profile and the word model from the same documents,
    /// normalized with [`preprocess`] like the detected texts.
    pub fn train<T: Tokenizer + ?Sized>(
        documents: &[String],
        order: NgramOrder,
        estimator: Estimator,
        tokenizer: &T,
    ) -> Self {
        let documents: Vec<String> = documents.iter().map(|d| preprocess(d)).collect();
        let profile = FrequencyProfile::from_documents(documents.iter().map(String::as_str), order);
        let sentences: Vec<Vec<&str>> = documents
            .iter()
            .flat_map(|document| tokenizer.sentences(document))
            .collect();
        let ngram_model = NgramModel::fit(&sentences, order, estimator);

        Self {
            profile,
            ngram_model,
        }
    }
}

/// Read-only trained models of all languages, ordered by label
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelsStorage {
    order: NgramOrder,
    models: BTreeMap<String, LanguageModel>,
}

impl ModelsStorage {
    /// Trains every language of `corpus` with [`UnicodeTokenizer`]
    #[inline]
    pub fn train(corpus: &Corpus, order: NgramOrder, estimator: Estimator) -> Self {
        Self::train_with_tokenizer(corpus, order, estimator, &UnicodeTokenizer)
    }

    /// Languages are trained independently, in parallel where available.
    pub fn train_with_tokenizer<T: Tokenizer + Sync + ?Sized>(
        corpus: &Corpus,
        order: NgramOrder,
        estimator: Estimator,
        tokenizer: &T,
    ) -> Self {
        let languages: Vec<(&str, &[String])> = corpus.iter().collect();

        let train_language = |(label, documents): (&str, &[String])| {
            if documents.is_empty() {
                tracing::warn!(language = label, "no documents, every score will be the worst");
            }
            tracing::debug!(language = label, documents = documents.len(), %order, "training");
            let model = LanguageModel::train(documents, order, estimator, tokenizer);
            (label.to_owned(), model)
        };

        #[cfg(not(target_family = "wasm"))]
        let models = languages.into_par_iter().map(train_language).collect();
        #[cfg(target_family = "wasm")]
        let models = languages.into_iter().map(train_language).collect();

        Self { order, models }
    }

    pub fn from_models(
        order: NgramOrder,
        models: impl IntoIterator<Item = (String, LanguageModel)>,
    ) -> Self {
        Self {
            order,
            models: models.into_iter().collect(),
        }
    }

    #[inline(always)]
    pub fn order(&self) -> NgramOrder {
        self.order
    }

    #[inline]
    pub fn get(&self, language: &str) -> Option<&LanguageModel> {
        self.models.get(language)
    }

    #[inline]
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// `(label, model)` in lexicographic label order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageModel)> {
        self.models
            .iter()
            .map(|(label, model)| (label.as_str(), model))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
