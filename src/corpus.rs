use crate::Error;
use ::std::collections::BTreeMap;
use rand::{seq::SliceRandom, Rng};

/// Labeled text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub label: String,
    pub text: String,
}

impl Document {
    #[inline]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Lowercased and trimmed, the form models are trained and queried with
#[inline]
pub fn preprocess(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Documents grouped by language label, labels in lexicographic order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    languages: BTreeMap<String, Vec<String>>,
}

impl Corpus {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, document: Document) {
        self.languages
            .entry(document.label)
            .or_default()
            .push(document.text);
    }

    /// Adds a language, possibly without documents
    #[inline]
    pub fn insert(&mut self, label: impl Into<String>, documents: Vec<String>) {
        self.languages.insert(label.into(), documents);
    }

    #[inline]
    pub fn documents(&self, label: &str) -> Option<&[String]> {
        self.languages.get(label).map(Vec::as_slice)
    }

    #[inline]
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.languages
            .iter()
            .map(|(label, documents)| (label.as_str(), documents.as_slice()))
    }

    /// Number of languages
    #[inline]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    #[inline]
    pub fn documents_count(&self) -> usize {
        self.languages.values().map(Vec::len).sum()
    }

    /// Smallest document count of all languages.
    /// Fails if there are no languages, or a language has no documents.
    pub fn min_documents(&self) -> Result<usize, Error> {
        if let Some((label, _)) = self.languages.iter().find(|(_, d)| d.is_empty()) {
            return Err(Error::EmptyLanguage(label.clone()));
        }
        self.languages
            .values()
            .map(Vec::len)
            .min()
            .ok_or(Error::EmptyCorpus)
    }

    /// Shuffles every language and splits its first `M` documents at 80%,
    /// `M` being [`Self::min_documents`].
    ///
    /// Every language gets exactly `floor(0.8 * M)` train documents
    /// and `M - floor(0.8 * M)` test documents, the rest are dropped.
    pub fn train_test_split<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Split, Error> {
        let min_documents = self.min_documents()?;
        let train_size = Split::train_size(min_documents);

        let mut split = Split::default();
        for (label, mut documents) in self.languages {
            documents.shuffle(rng);
            documents.truncate(min_documents);
            let test = documents.split_off(train_size);
            split.train.insert(label.clone(), documents);
            split.test.insert(label, test);
        }

        tracing::debug!(
            languages = split.train.len(),
            train = train_size,
            test = min_documents - train_size,
            "corpus split"
        );

        Ok(split)
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for document in iter {
            corpus.push(document);
        }
        corpus
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Split {
    pub train: Corpus,
    pub test: Corpus,
}

impl Split {
    /// `floor(0.8 * documents)`
    #[inline(always)]
    pub const fn train_size(documents: usize) -> usize {
        documents * 4 / 5
    }
}
