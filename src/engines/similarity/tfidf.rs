use super::tokenizer::Tokenizer;
use crate::error::{Result, TicketError};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// TF-IDF vectors fitted once over the whole question pool.
///
/// Vectors are indexed like the input texts and never change after [`SimilarityModel::fit`].
/// Term frequency is the raw count, idf is smoothed (`ln((1 + n) / (1 + df)) + 1`)
/// and every row is L2-normalised.
#[derive(Debug, Clone)]
pub struct SimilarityModel {
    vocabulary: Vec<String>,
    vectors: Vec<Vec<f64>>,
    norms: Vec<f64>,
}

impl SimilarityModel {
    /// Fits the vocabulary and idf weights over `texts`.
    ///
    /// Fails with [`TicketError::InvalidInput`] when the pool is empty or has
    /// fewer than two distinct non-empty texts.
    pub fn fit(texts: &[String]) -> Result<Self> {
        if texts.is_empty() {
            return Err(TicketError::InvalidInput(
                "Question pool is empty".to_string()
            ));
        }

        let distinct: BTreeSet<&str> = texts
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if distinct.len() < 2 {
            return Err(TicketError::InvalidInput(format!(
                "Similarity needs at least 2 distinct non-empty questions, found {}",
                distinct.len()
            )));
        }

        let tokenizer = Tokenizer::new();
        let documents: Vec<Vec<String>> = texts.iter().map(|t| tokenizer.tokenize(t)).collect();

        // Sorted vocabulary keeps feature order stable across runs
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &documents {
            let unique: BTreeSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let vocabulary: Vec<String> = document_frequency.keys().map(|t| t.to_string()).collect();
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .values()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut vectors = Vec::with_capacity(documents.len());
        let mut norms = Vec::with_capacity(documents.len());
        for tokens in &documents {
            let mut row = vec![0.0; vocabulary.len()];
            for token in tokens {
                if let Some(&col) = index.get(token.as_str()) {
                    row[col] += 1.0;
                }
            }
            for (value, weight) in row.iter_mut().zip(&idf) {
                *value *= weight;
            }

            let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for value in row.iter_mut() {
                    *value /= norm;
                }
            }
            norms.push(if norm > 0.0 { 1.0 } else { 0.0 });
            vectors.push(row);
        }

        Ok(Self {
            vocabulary,
            vectors,
            norms,
        })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Shared dimensionality of every vector.
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn vector(&self, i: usize) -> Option<&[f64]> {
        self.vectors.get(i).map(|v| v.as_slice())
    }

    /// Cosine similarity of questions `i` and `j`, clamped into `[0, 1]`.
    ///
    /// A question is always fully similar to itself. Two token-less questions
    /// compare as identical; a token-less question is dissimilar to everything else.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        if i == j || self.vectors[i] == self.vectors[j] {
            return 1.0;
        }

        let norm = self.norms[i] * self.norms[j];
        if norm == 0.0 {
            return 0.0;
        }

        let dot: f64 = self.vectors[i]
            .iter()
            .zip(&self.vectors[j])
            .map(|(a, b)| a * b)
            .sum();
        (dot / norm).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        assert!(matches!(
            SimilarityModel::fit(&[]),
            Err(TicketError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_single_distinct_text_is_rejected() {
        let texts = pool(&["Define a process", "Define a process", "   "]);
        assert!(matches!(
            SimilarityModel::fit(&texts),
            Err(TicketError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_vectors_share_dimension() {
        let texts = pool(&["Define a process", "Explain virtual memory paging", "Process scheduling"]);
        let model = SimilarityModel::fit(&texts).unwrap();

        assert_eq!(model.len(), 3);
        for i in 0..model.len() {
            assert_eq!(model.vector(i).unwrap().len(), model.dimension());
        }
        assert!(model.vocabulary().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_disjoint_texts_are_dissimilar() {
        let texts = pool(&["alpha beta", "gamma delta"]);
        let model = SimilarityModel::fit(&texts).unwrap();
        assert_eq!(model.similarity(0, 1), 0.0);
    }

    #[test]
    fn test_shared_terms_raise_similarity() {
        let texts = pool(&[
            "process scheduling algorithms",
            "process scheduling in kernels",
            "file system journaling",
        ]);
        let model = SimilarityModel::fit(&texts).unwrap();

        let close = model.similarity(0, 1);
        let far = model.similarity(0, 2);
        assert!(close > far);
        assert!((0.0..=1.0).contains(&close));
        assert_eq!(model.similarity(0, 1), model.similarity(1, 0));
    }

    #[test]
    fn test_tokenless_questions() {
        let texts = pool(&["?", "!", "memory management"]);
        let model = SimilarityModel::fit(&texts).unwrap();

        assert_eq!(model.similarity(0, 0), 1.0);
        assert_eq!(model.similarity(0, 1), 1.0);
        assert_eq!(model.similarity(0, 2), 0.0);
    }
}
