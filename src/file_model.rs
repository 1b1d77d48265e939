//! Serialized form of [`ModelsStorage`]: `serde_encom` text compressed with brotli.
//!
//! Profiles keep their ngrams in first-seen order, so rank ties survive a round trip.

use crate::{
    lm::{Estimator, NgramModel, Vocabulary},
    profile::FrequencyProfile,
    LanguageModel, ModelsStorage, NgramOrder,
};
use ::std::io::{self, Read, Write};
use brotli::{CompressorWriter, Decompressor};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUFFER_SIZE: usize = 4096;
const QUALITY: u32 = 11;
const LG_WINDOW_SIZE: u32 = 22;

// serde_encom writes an empty sequence as nothing, so empty lists are skipped
// and nested ones are never empty.

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileProfile {
    pub max_order: usize,
    /// `(ngram, count)` in first-seen order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ngrams: Vec<(String, usize)>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNgramModel {
    pub order: usize,
    pub estimator: String,
    /// Tokens in id order, starting with the reserved symbols
    pub vocabulary: Vec<String>,
    /// `(ngram ids, count)` of every order, sorted.
    /// The last id is the token, the rest is its context.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counts: Vec<(Vec<u32>, usize)>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLanguage {
    pub label: String,
    pub profile: FileProfile,
    pub ngram_model: FileNgramModel,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileModels {
    pub order: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<FileLanguage>,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Read error")]
    Read(#[source] io::Error),
    #[error("Write error")]
    Write(#[source] io::Error),
    #[error("SerdeEncom error")]
    SerdeEncom(#[from] serde_encom::Error),
    #[error("Invalid order {0}")]
    Order(usize),
    #[error("Unknown estimator {0:?}")]
    Estimator(String),
    #[error("Invalid vocabulary of language {0:?}")]
    Vocabulary(String),
    #[error("Invalid counts of language {0:?}")]
    Counts(String),
}

impl From<&FrequencyProfile> for FileProfile {
    fn from(profile: &FrequencyProfile) -> Self {
        Self {
            max_order: profile.max_order().get(),
            ngrams: profile
                .iter()
                .map(|(ngram, count)| (ngram.to_owned(), count))
                .collect(),
        }
    }
}

impl From<&NgramModel> for FileNgramModel {
    fn from(model: &NgramModel) -> Self {
        let mut counts: Vec<(Vec<u32>, usize)> = model
            .contexts()
            .iter()
            .flat_map(|(context, counts)| {
                counts.next.iter().map(|(&token, &count)| {
                    let mut ngram = Vec::with_capacity(context.len() + 1);
                    ngram.extend_from_slice(context);
                    ngram.push(token);
                    (ngram, count)
                })
            })
            .collect();
        counts.sort_unstable();

        Self {
            order: model.order().get(),
            estimator: <&'static str>::from(model.estimator()).to_owned(),
            vocabulary: model.vocabulary().iter().map(str::to_owned).collect(),
            counts,
        }
    }
}

impl From<&ModelsStorage> for FileModels {
    fn from(storage: &ModelsStorage) -> Self {
        Self {
            order: storage.order().get(),
            languages: storage
                .iter()
                .map(|(label, model)| FileLanguage {
                    label: label.to_owned(),
                    profile: (&model.profile).into(),
                    ngram_model: (&model.ngram_model).into(),
                })
                .collect(),
        }
    }
}

#[inline]
fn parse_order(order: usize) -> Result<NgramOrder, StorageError> {
    NgramOrder::new(order).map_err(|_| StorageError::Order(order))
}

fn parse_vocabulary(tokens: Vec<String>, label: &str) -> Result<Vocabulary, StorageError> {
    let reserved_len = Vocabulary::RESERVED.len();
    let reserved = tokens.iter().take(reserved_len).map(String::as_str);
    if !reserved.eq(Vocabulary::RESERVED) {
        return Err(StorageError::Vocabulary(label.to_owned()));
    }

    let mut vocabulary = Vocabulary::default();
    for (id, token) in tokens.iter().enumerate().skip(reserved_len) {
        if vocabulary.insert(token) as usize != id {
            // duplicate token
            return Err(StorageError::Vocabulary(label.to_owned()));
        }
    }
    Ok(vocabulary)
}

impl FileLanguage {
    fn into_model(self) -> Result<(String, LanguageModel), StorageError> {
        let Self {
            label,
            profile,
            ngram_model,
        } = self;

        let profile = FrequencyProfile::from_counts(
            parse_order(profile.max_order)?,
            profile
                .ngrams
                .into_iter()
                .map(|(ngram, count)| (CompactString::from(ngram), count)),
        );

        let order = parse_order(ngram_model.order)?;
        let estimator: Estimator = ngram_model
            .estimator
            .parse()
            .map_err(|_| StorageError::Estimator(ngram_model.estimator.clone()))?;
        let vocabulary = parse_vocabulary(ngram_model.vocabulary, &label)?;
        let ngram_model =
            NgramModel::from_parts(order, estimator, vocabulary, ngram_model.counts)
                .ok_or_else(|| StorageError::Counts(label.clone()))?;

        Ok((
            label,
            LanguageModel {
                profile,
                ngram_model,
            },
        ))
    }
}

impl FileModels {
    pub fn into_storage(self) -> Result<ModelsStorage, StorageError> {
        let order = parse_order(self.order)?;
        let models = self
            .languages
            .into_iter()
            .map(FileLanguage::into_model)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ModelsStorage::from_models(order, models))
    }

    pub fn read(reader: impl Read) -> Result<Self, StorageError> {
        let mut uncompressed = Decompressor::new(reader, BUFFER_SIZE);
        let mut content = String::new();
        uncompressed
            .read_to_string(&mut content)
            .map_err(StorageError::Read)?;

        serde_encom::from_str(&content).map_err(StorageError::from)
    }

    pub fn write(&self, writer: impl Write) -> Result<(), StorageError> {
        let serialized = serde_encom::to_string(self)?;
        let mut compressed = CompressorWriter::new(writer, BUFFER_SIZE, QUALITY, LG_WINDOW_SIZE);
        compressed
            .write_all(serialized.as_bytes())
            .map_err(StorageError::Write)?;
        compressed.flush().map_err(StorageError::Write)
    }
}

impl ModelsStorage {
    /// Compressed serialized form, see [`Self::from_bytes`]
    pub fn to_bytes(&self) -> Result<Vec<u8>, StorageError> {
        let mut bytes = Vec::new();
        FileModels::from(self).write(&mut bytes)?;
        Ok(bytes)
    }

    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StorageError> {
        Self::read(bytes)
    }

    #[inline]
    pub fn read(reader: impl Read) -> Result<Self, StorageError> {
        FileModels::read(reader)?.into_storage()
    }

    #[inline]
    pub fn write(&self, writer: impl Write) -> Result<(), StorageError> {
        FileModels::from(self).write(writer)
    }
}
