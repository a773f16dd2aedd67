// Probability distribution construction — the normalize/clamp/rank pipeline.
//
// Perturbed raw scores become the reported distribution in two passes:
// normalize to a sum of 1, clamp each probability up to the 5% floor,
// rank descending, then renormalize so the clamped set sums to 1 again.
// The pass order matters: the floor is applied before the final rescale,
// so floored entries can end slightly below 0.05 once the set is rescaled
// (never below 0.05 / 1.2 with five categories).

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// No category is reported below this probability before the final rescale.
pub const PROBABILITY_FLOOR: f64 = 0.05;

/// One category's share of the reported distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryProbability {
    pub category: Category,
    pub probability: f64,
}

/// The engine's output: top category, its probability, and the full
/// ranked distribution over all five categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub confidence: f64,
    /// All five categories, descending by probability, summing to 1.
    pub ranked: Vec<CategoryProbability>,
}

/// Turn perturbed per-category scores into the ranked distribution.
///
/// A zero score sum cannot occur once perturbation has run, but the guard
/// keeps the function total: a zero sum divides by 1, every probability
/// lands on the floor, and the rescale yields five equal shares of 0.2.
pub fn rank(scores: Vec<(Category, f64)>) -> Vec<CategoryProbability> {
    let total: f64 = scores.iter().map(|(_, s)| s).sum();
    let divisor = if total > 0.0 { total } else { 1.0 };

    let mut ranked: Vec<CategoryProbability> = scores
        .into_iter()
        .map(|(category, score)| CategoryProbability {
            category,
            probability: (score / divisor).max(PROBABILITY_FLOOR),
        })
        .collect();

    // Stable sort: exact ties keep table order
    ranked.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Clamping can push the sum above 1, so rescale back to a sum of 1
    let clamped_sum: f64 = ranked.iter().map(|p| p.probability).sum();
    for entry in &mut ranked {
        entry.probability /= clamped_sum;
    }

    ranked
}
