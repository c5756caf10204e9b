// Matching engine: skill extraction, TF-IDF + skill-overlap scoring, recommendations.
// Everything below handlers is pure and synchronous; handlers are the only async layer.

pub mod extractor;
pub mod handlers;
pub mod recommender;
pub mod scorer;
mod stop_words;
pub mod tfidf;
