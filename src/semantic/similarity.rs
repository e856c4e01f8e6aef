//! Cosine similarity search over the reference name table.

use std::cmp::Ordering;

use crate::semantic::reference::ReferenceTable;
use crate::semantic::vectorizer::CharNgramVectorizer;

/// Calculate cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has zero norm, so queries that share no
/// n-gram with the fitted vocabulary rank below everything else.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

/// Semantic similarity index over the reference name table.
///
/// Built once at startup: the vectorizer is fitted over the table's name
/// column and every reference name is pre-transformed. The index is
/// read-only afterwards and shared across requests.
#[derive(Debug, Clone)]
pub struct SemanticIndex {
    table: ReferenceTable,
    vectorizer: CharNgramVectorizer,
    reference_vectors: Vec<Vec<f64>>,
}

impl SemanticIndex {
    /// Build an index over the given reference table.
    pub fn build(table: ReferenceTable) -> Self {
        let names = table.names();
        let mut vectorizer = CharNgramVectorizer::for_names();
        vectorizer.fit(&names);

        let reference_vectors = names.iter().map(|name| vectorizer.transform(name)).collect();

        SemanticIndex {
            table,
            vectorizer,
            reference_vectors,
        }
    }

    /// The reference table backing this index.
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Get the most similar reference names for a normalized query.
    ///
    /// Returns up to `limit` names ordered by similarity descending. Equal
    /// similarities are broken by table position, earlier rows first, so the
    /// result is deterministic for a fixed table. An empty table yields an
    /// empty result.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<String> {
        if self.table.is_empty() {
            return Vec::new();
        }

        let query_vector = self.vectorizer.transform(name);
        let similarities: Vec<f64> = self
            .reference_vectors
            .iter()
            .map(|reference| cosine_similarity(&query_vector, reference))
            .collect();

        let mut indices: Vec<usize> = (0..similarities.len()).collect();
        indices.sort_by(|&a, &b| {
            similarities[b]
                .partial_cmp(&similarities[a])
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.cmp(&b))
        });

        indices
            .into_iter()
            .take(limit)
            .filter_map(|idx| self.table.get(idx).map(|r| r.name.clone()))
            .collect()
    }
}
