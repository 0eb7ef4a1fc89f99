pub mod tokenizer;
pub mod tfidf;

pub use tokenizer::Tokenizer;
pub use tfidf::SimilarityModel;
