//! # Classic n-gram language identification
//!
//! Two classifier families trained on the same labeled corpus:
//! * character ngram frequency profiles compared with the "out-of-place" rank distance,
//! * word ngram MLE models compared by perplexity.
//!
//! Models of every language are trained once into a read-only [`ModelsStorage`],
//! which can be persisted and loaded without retraining.
//!
//! # Example
//! ```rust
//! use langram_classic::{Corpus, DetectorBuilder, Document, Estimator, Mode, ModelsStorage, NgramOrder};
//!
//! let corpus: Corpus = [
//!     Document::new("en", "the quick brown fox jumps over the lazy dog"),
//!     Document::new("fr", "le renard brun saute par-dessus le chien paresseux"),
//! ]
//! .into_iter()
//! .collect();
//! let models_storage = ModelsStorage::train(&corpus, NgramOrder::new(3)?, Estimator::Mle);
//!
//! let detector = DetectorBuilder::new(&models_storage)
//!     .mode(Mode::rank_distance(300)?)
//!     .build();
//! assert_eq!(detector.detect("the brown dog"), Some("en"));
//! # Ok::<(), langram_classic::Error>(())
//! ```

/// `AHashMap` literal
#[cfg(test)]
macro_rules! ahashmap {
    ($($key:expr => $value:expr),* $(,)?) => {
        [$(($key, $value)),*]
            .into_iter()
            .collect::<::ahash::AHashMap<_, _>>()
    };
}

mod corpus;
mod detector;
mod distance;
mod error;
mod evaluation;
mod file_model;
pub mod lm;
mod ngram_order;
mod ngrams;
mod profile;
mod tokenizer;

pub use corpus::{preprocess, Corpus, Document, Split};
pub use detector::{
    classify, Detector, DetectorBuilder, LanguageModel, Mode, ModelsStorage, Score,
};
pub use distance::{distance, rank_distance};
pub use error::Error;
pub use evaluation::{evaluate, Metrics};
pub use file_model::{FileLanguage, FileModels, FileNgramModel, FileProfile, StorageError};
pub use lm::{Estimator, NgramModel};
pub use ngram_order::NgramOrder;
pub use ngrams::{everygrams, ngrams};
pub use profile::{FrequencyProfile, ProfileBuilder, RankTable};
pub use tokenizer::{Tokenizer, UnicodeTokenizer};
