//! Word ngram probability models scored by perplexity.
//!
//! Every training sentence is padded with `order - 1` [`SENTENCE_START`] markers
//! and one [`SENTENCE_END`] marker, then all ngrams of orders `1..=order` are counted
//! against their prefix. The default [`Estimator::Mle`] applies no smoothing,
//! so an unseen transition has probability 0 and makes perplexity infinite.

use crate::{ngrams::ngrams, NgramOrder};
use rustc_hash::FxHashMap;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

mod vocabulary;

pub(crate) use vocabulary::TokenId;
pub use vocabulary::{Vocabulary, SENTENCE_END, SENTENCE_START, UNKNOWN};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Estimator {
    /// `count(context, token) / count(context)`
    #[default]
    Mle,
    /// Add-one smoothing over the vocabulary
    Laplace,
}

/// Continuation counts of one context
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ContextCounts {
    pub(crate) total: usize,
    pub(crate) next: FxHashMap<TokenId, usize>,
}

impl ContextCounts {
    #[inline]
    fn add(&mut self, token: TokenId, count: usize) {
        self.total += count;
        *self.next.entry(token).or_default() += count;
    }

    #[inline(always)]
    fn get(&self, token: TokenId) -> usize {
        self.next.get(&token).copied().unwrap_or_default()
    }
}

pub(crate) type Contexts = FxHashMap<Box<[TokenId]>, ContextCounts>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NgramModel {
    order: NgramOrder,
    estimator: Estimator,
    vocabulary: Vocabulary,
    contexts: Contexts,
}

impl NgramModel {
    /// Fits a model on tokenized sentences.
    pub fn fit<S: AsRef<str>>(
        sentences: &[Vec<S>],
        order: NgramOrder,
        estimator: Estimator,
    ) -> Self {
        let mut vocabulary = Vocabulary::default();
        let mut contexts = Contexts::default();

        for sentence in sentences {
            let ids: Vec<TokenId> = sentence
                .iter()
                .map(|token| vocabulary.insert(token.as_ref()))
                .collect();
            let padded = pad(order, ids);
            for n in order.orders() {
                for ngram in ngrams(&padded, n) {
                    let Some((&token, context)) = ngram.split_last() else {
                        continue;
                    };
                    contexts.entry(context.into()).or_default().add(token, 1);
                }
            }
        }

        Self {
            order,
            estimator,
            vocabulary,
            contexts,
        }
    }

    /// Rebuilds a model from stored `(ngram, count)` pairs of every order.
    /// Returns [`None`] if an ngram is empty, longer than `order`,
    /// or refers to a token id outside the vocabulary.
    pub(crate) fn from_parts(
        order: NgramOrder,
        estimator: Estimator,
        vocabulary: Vocabulary,
        counts: impl IntoIterator<Item = (Vec<TokenId>, usize)>,
    ) -> Option<Self> {
        let mut contexts = Contexts::default();
        for (ngram, count) in counts {
            if ngram.len() > order.get()
                || ngram.iter().any(|&id| id as usize >= vocabulary.len())
            {
                return None;
            }
            let (&token, context) = ngram.split_last()?;
            contexts.entry(context.into()).or_default().add(token, count);
        }

        Some(Self {
            order,
            estimator,
            vocabulary,
            contexts,
        })
    }

    #[inline(always)]
    pub fn order(&self) -> NgramOrder {
        self.order
    }

    #[inline(always)]
    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    #[inline(always)]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline(always)]
    pub(crate) fn contexts(&self) -> &Contexts {
        &self.contexts
    }

    /// Times `token` followed `context` in the padded training data
    pub fn count(&self, token: &str, context: &[&str]) -> usize {
        let context = self.encode(context.iter().copied());
        self.contexts
            .get(context.as_slice())
            .map_or(0, |c| c.get(self.vocabulary.lookup(token)))
    }

    /// `P(token | context)`, out of vocabulary tokens are looked up as [`UNKNOWN`]
    pub fn score(&self, token: &str, context: &[&str]) -> f64 {
        let context = self.encode(context.iter().copied());
        self.probability(self.vocabulary.lookup(token), &context)
    }

    fn probability(&self, token: TokenId, context: &[TokenId]) -> f64 {
        let (count, total) = self
            .contexts
            .get(context)
            .map_or((0, 0), |c| (c.get(token), c.total));

        match self.estimator {
            Estimator::Mle => {
                if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                }
            }
            Estimator::Laplace => (count + 1) as f64 / (total + self.vocabulary.len()) as f64,
        }
    }

    #[inline]
    fn encode<'a>(&self, tokens: impl Iterator<Item = &'a str>) -> Vec<TokenId> {
        tokens.map(|token| self.vocabulary.lookup(token)).collect()
    }

    /// Perplexity of tokenized sentences, each padded like the training sentences.
    ///
    /// Every token after the start padding is scored, end markers included.
    /// Returns [`f64::INFINITY`] if any token has probability 0, or if there is nothing to score.
    pub fn perplexity<S: AsRef<str>>(&self, sentences: &[Vec<S>]) -> f64 {
        let padded: Vec<Vec<TokenId>> = sentences
            .iter()
            .map(|sentence| {
                pad(
                    self.order,
                    self.encode(sentence.iter().map(|token| token.as_ref())),
                )
            })
            .collect();
        self.perplexity_padded(padded.iter().map(Vec::as_slice))
    }

    /// Perplexity of already padded id sequences
    pub(crate) fn perplexity_padded<'p>(&self, padded: impl Iterator<Item = &'p [TokenId]>) -> f64 {
        let mut log_sum = 0.0;
        let mut scored = 0usize;

        for sequence in padded {
            for ngram in ngrams(sequence, self.order.get()) {
                let Some((&token, context)) = ngram.split_last() else {
                    continue;
                };
                let probability = self.probability(token, context);
                if probability == 0.0 {
                    return f64::INFINITY;
                }
                log_sum += probability.ln();
                scored += 1;
            }
        }

        if scored == 0 {
            return f64::INFINITY;
        }

        (-log_sum / scored as f64).exp()
    }
}

/// `order - 1` start markers, the tokens, one end marker
#[inline]
fn pad(order: NgramOrder, ids: Vec<TokenId>) -> Vec<TokenId> {
    let mut padded = Vec::with_capacity(ids.len() + order.get());
    padded.resize(order.get() - 1, Vocabulary::START_ID);
    padded.extend(ids);
    padded.push(Vocabulary::END_ID);
    padded
}
