// The ticket classifier — keyword scoring plus simulated model uncertainty.
//
// For each category the raw score is the count of its trigger substrings
// found in the lowercased ticket text. A uniform draw from [0, 0.5) is
// added per category to simulate classifier uncertainty, which makes
// rankings intentionally non-deterministic across repeated calls on the
// same input. The perturbed scores then go through the two-pass
// normalization in `distribution`.
//
// The generator is a parameter so tests can pin the perturbation and
// verify the scoring math deterministically.

use rand::Rng;
use tracing::debug;

use crate::category::Category;
use crate::keywords::KeywordTable;

use super::distribution::{self, Classification};

/// Upper bound (exclusive) of the per-category uncertainty draw.
pub const PERTURBATION_MAX: f64 = 0.5;

/// The scoring engine. Owns the immutable keyword table; holds no other
/// state, so concurrent `classify` calls are fully independent.
pub struct TicketClassifier {
    table: KeywordTable,
}

impl Default for TicketClassifier {
    fn default() -> Self {
        Self::new(KeywordTable::default())
    }
}

impl TicketClassifier {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Raw pre-perturbation scores: trigger match counts per category,
    /// in category declaration order.
    pub fn raw_scores(&self, text: &str) -> Vec<(Category, usize)> {
        let lower = text.to_lowercase();
        Category::ALL
            .into_iter()
            .map(|category| (category, self.table.match_count(category, &lower)))
            .collect()
    }

    /// Classify a ticket using the supplied random generator.
    ///
    /// Total over all inputs, including the empty string; with no trigger
    /// matches the ranking is driven entirely by the perturbation.
    pub fn classify_with<R: Rng>(&self, text: &str, rng: &mut R) -> Classification {
        let perturbed: Vec<(Category, f64)> = self
            .raw_scores(text)
            .into_iter()
            .map(|(category, raw)| {
                (category, raw as f64 + rng.random_range(0.0..PERTURBATION_MAX))
            })
            .collect();

        let ranked = distribution::rank(perturbed);

        debug!(
            category = ranked[0].category.as_str(),
            confidence = ranked[0].probability,
            "Classified ticket"
        );

        Classification {
            category: ranked[0].category,
            confidence: ranked[0].probability,
            ranked,
        }
    }

    /// Classify a ticket using the thread-local generator.
    pub fn classify(&self, text: &str) -> Classification {
        let mut rng = rand::rng();
        self.classify_with(text, &mut rng)
    }
}
