mod corpus;
mod writer;

pub use corpus::{load_corpus, read_corpus, CorpusError};
pub use writer::{write_metrics, write_model_file, write_scores_file, WriteError};
