//! Labeled corpus in gzip-compressed JSON lines:
//! `{"label": "en", "content": "..."}` per line.

use ::std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};
use flate2::read::GzDecoder;
use langram_classic::{preprocess, Corpus, Document};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Open error {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Read error at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("Invalid record at line {line}")]
    Record {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct Record {
    label: String,
    content: String,
}

/// Reads uncompressed JSON lines. Content is lowercased and trimmed,
/// empty lines are skipped.
pub fn read_corpus(reader: impl BufRead) -> Result<Corpus, CorpusError> {
    let mut corpus = Corpus::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| CorpusError::Read {
            line: line_number,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let record: Record =
            serde_json::from_str(&line).map_err(|source| CorpusError::Record {
                line: line_number,
                source,
            })?;
        corpus.push(Document::new(record.label, preprocess(&record.content)));
    }

    tracing::info!(
        languages = corpus.len(),
        documents = corpus.documents_count(),
        "corpus loaded"
    );
    Ok(corpus)
}

/// Reads a gzip-compressed corpus file
pub fn load_corpus(path: &Path) -> Result<Corpus, CorpusError> {
    let file = File::open(path).map_err(|source| CorpusError::Open {
        path: path.to_owned(),
        source,
    })?;
    read_corpus(BufReader::new(GzDecoder::new(file)))
}
