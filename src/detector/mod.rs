use crate::{
    corpus::preprocess,
    distance::rank_distance,
    profile::{FrequencyProfile, RankTable},
    tokenizer::{Tokenizer, UnicodeTokenizer},
};
use ::core::cmp::Ordering;

mod builder;
mod config;
mod storage;

pub use builder::DetectorBuilder;
pub use config::{Mode, Score};
pub use storage::{LanguageModel, ModelsStorage};

#[derive(Clone, Debug)]
struct Candidate<'m> {
    language: &'m str,
    model: &'m LanguageModel,
    /// Reference ranking, only in [`Mode::RankDistance`]
    ranks: Option<RankTable>,
}

#[derive(Clone, Debug)]
pub struct Detector<'m, T: Tokenizer = UnicodeTokenizer> {
    models_storage: &'m ModelsStorage,
    mode: Mode,
    candidates: Vec<Candidate<'m>>,
    tokenizer: T,
}

impl<'m, T: Tokenizer> Detector<'m, T> {
    /// Reference rank tables are computed here once, not per detection
    fn new(builder: DetectorBuilder<'m, T>) -> Self {
        let DetectorBuilder {
            models_storage,
            mode,
            languages,
            tokenizer,
        } = builder;

        let candidates = models_storage
            .iter()
            .filter(|(language, _)| {
                languages
                    .as_ref()
                    .map_or(true, |selected| selected.contains(*language))
            })
            .map(|(language, model)| Candidate {
                language,
                model,
                ranks: match mode {
                    Mode::RankDistance { max_size } => {
                        Some(model.profile.rank_table(max_size.get()))
                    }
                    Mode::Perplexity => None,
                },
            })
            .collect();

        Self {
            models_storage,
            mode,
            candidates,
            tokenizer,
        }
    }

    #[inline(always)]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Selected languages in lexicographic order
    #[inline]
    pub fn languages(&self) -> impl Iterator<Item = &'m str> + '_ {
        self.candidates.iter().map(|c| c.language)
    }

    /// Scores of all selected languages for the provided text.
    ///
    /// Result is sorted by score in an ascending order, ties by language label.
    pub fn scores(&self, text: &str) -> Vec<(&'m str, Score)> {
        let text = preprocess(text);
        let mut scores: Vec<_> = match self.mode {
            Mode::RankDistance { max_size } => {
                let max_size = max_size.get();
                let sample = FrequencyProfile::from_documents(
                    [text.as_str()],
                    self.models_storage.order(),
                )
                .rank_table(max_size);
                self.candidates
                    .iter()
                    .filter_map(|c| {
                        let reference = c.ranks.as_ref()?;
                        let distance = rank_distance(&sample, reference, max_size);
                        Some((c.language, Score::Distance(distance)))
                    })
                    .collect()
            }
            Mode::Perplexity => {
                let sentences = self.tokenizer.sentences(&text);
                self.candidates
                    .iter()
                    .map(|c| {
                        let perplexity = c.model.ngram_model.perplexity(&sentences);
                        (c.language, Score::Perplexity(perplexity))
                    })
                    .collect()
            }
        };

        scores.sort_by(order_by_score_and_lang);
        scores
    }

    /// Language with the lowest score, ties broken by the lexicographically first label.
    ///
    /// Returns [`None`] only if no languages are selected.
    #[inline]
    pub fn detect(&self, text: &str) -> Option<&'m str> {
        self.scores(text).into_iter().next().map(|(language, _)| language)
    }
}

/// Classifies `text` against every language of `models_storage`
#[inline]
pub fn classify<'m>(
    text: &str,
    mode: Mode,
    models_storage: &'m ModelsStorage,
) -> Option<&'m str> {
    DetectorBuilder::new(models_storage)
        .mode(mode)
        .build()
        .detect(text)
}

#[inline]
fn order_by_score_and_lang(first: &(&str, Score), second: &(&str, Score)) -> Ordering {
    first
        .1
        .total_cmp(&second.1)
        .then_with(|| first.0.cmp(second.0))
}
