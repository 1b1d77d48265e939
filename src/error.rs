use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Ngram order must be at least 1")]
    ZeroOrder,
    #[error("Rank table size must be at least 1")]
    ZeroRankSize,
    #[error("Corpus has no languages")]
    EmptyCorpus,
    #[error("Language {0:?} has no documents")]
    EmptyLanguage(String),
    #[error("No test documents, metrics are undefined")]
    NoTestDocuments,
    #[error("No language models to classify with")]
    NoModels,
}
