//! TF-IDF vectorization and cosine similarity over a small in-request corpus.
//!
//! Terms are lowercase runs of two or more word characters with English
//! stopwords removed. Weights are raw counts times the smoothed idf
//! `ln((1 + n) / (1 + df)) + 1`, and every document vector is L2-normalized.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::matching::stop_words::ENGLISH_STOP_WORDS;

pub const DEFAULT_MAX_FEATURES: usize = 500;

pub struct TfidfVectorizer {
    max_features: usize,
    token_pattern: Regex,
    stop_words: HashSet<&'static str>,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            max_features,
            token_pattern: Regex::new(r"\b\w\w+\b")?,
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        })
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.token_pattern
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(t))
            .map(str::to_string)
            .collect()
    }

    /// Terms kept for the corpus: the `max_features` most frequent by total
    /// count, ties in first-seen order. Returned in that ranking order.
    pub fn vocabulary(&self, documents: &[&str]) -> Vec<String> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();
        select_vocabulary(&tokenized, self.max_features)
    }

    /// One L2-normalized TF-IDF vector per document, indexed like `vocabulary`.
    pub fn fit_transform(&self, documents: &[&str]) -> Vec<Vec<f64>> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();
        let vocabulary = select_vocabulary(&tokenized, self.max_features);
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let counts: Vec<Vec<f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    if let Some(&i) = index.get(token.as_str()) {
                        row[i] += 1.0;
                    }
                }
                row
            })
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = (0..vocabulary.len())
            .map(|i| {
                let df = counts.iter().filter(|row| row[i] > 0.0).count() as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        counts
            .into_iter()
            .map(|row| {
                let weighted: Vec<f64> = row.iter().zip(&idf).map(|(tf, w)| tf * w).collect();
                l2_normalize(weighted)
            })
            .collect()
    }
}

fn select_vocabulary(tokenized: &[Vec<String>], max_features: usize) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, usize> = HashMap::new();

    for token in tokenized.iter().flatten() {
        let count = totals.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.as_str());
        }
        *count += 1;
    }

    // sort_by is stable, so equal counts keep first-seen order
    order.sort_by(|a, b| totals[b].cmp(&totals[a]));
    order.truncate(max_features);
    order.into_iter().map(str::to_string).collect()
}

fn l2_normalize(mut vector: Vec<f64>) -> Vec<f64> {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in &mut vector {
            *v /= norm;
        }
    }
    vector
}

/// Cosine of the angle between two vectors; 0.0 when either is all-zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// TF-IDF cosine similarity between two documents, in [0, 1].
pub fn text_similarity(vectorizer: &TfidfVectorizer, a: &str, b: &str) -> f64 {
    let vectors = vectorizer.fit_transform(&[a, b]);
    cosine_similarity(&vectors[0], &vectors[1])
}
