use crate::{tokenizer::Tokenizer, Corpus, Detector, Error};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Accuracy and macro-averaged F1 of a test run
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(rename = "ac")]
    pub accuracy: f64,
    #[serde(rename = "fscore")]
    pub macro_f1: f64,
}

#[derive(Clone, Copy, Debug, Default)]
struct ClassCounts {
    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
}

impl ClassCounts {
    /// `2tp / (2tp + fp + fn)`, 0 when the class was never expected nor predicted correctly
    #[inline]
    fn f1(self) -> f64 {
        let denominator = 2 * self.true_positives + self.false_positives + self.false_negatives;
        if denominator == 0 {
            0.0
        } else {
            (2 * self.true_positives) as f64 / denominator as f64
        }
    }
}

impl Metrics {
    /// Computes metrics from `(expected, predicted)` label pairs.
    ///
    /// Classes are the union of expected and predicted labels.
    pub fn from_predictions<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, Error> {
        let mut classes: AHashMap<&str, ClassCounts> = AHashMap::new();
        let mut total = 0usize;
        let mut correct = 0usize;

        for (expected, predicted) in pairs {
            total += 1;
            if expected == predicted {
                correct += 1;
                classes.entry(expected).or_default().true_positives += 1;
            } else {
                classes.entry(expected).or_default().false_negatives += 1;
                classes.entry(predicted).or_default().false_positives += 1;
            }
        }

        if total == 0 {
            return Err(Error::NoTestDocuments);
        }

        let f1_sum: f64 = classes.values().map(|c| c.f1()).sum();

        Ok(Self {
            accuracy: correct as f64 / total as f64,
            macro_f1: f1_sum / classes.len() as f64,
        })
    }
}

/// Detects every document of `test` and scores the predictions against its labels.
pub fn evaluate<T: Tokenizer>(test: &Corpus, detector: &Detector<'_, T>) -> Result<Metrics, Error> {
    if test.documents_count() == 0 {
        return Err(Error::NoTestDocuments);
    }

    let mut pairs = Vec::with_capacity(test.documents_count());
    for (label, documents) in test.iter() {
        for document in documents {
            let predicted = detector.detect(document).ok_or(Error::NoModels)?;
            if predicted != label {
                tracing::trace!(expected = label, predicted, "misclassified");
            }
            pairs.push((label, predicted));
        }
    }

    let metrics = Metrics::from_predictions(pairs)?;
    tracing::info!(
        documents = test.documents_count(),
        accuracy = metrics.accuracy,
        macro_f1 = metrics.macro_f1,
        "evaluated"
    );

    Ok(metrics)
}
