// Model evaluation data — the fixed numbers from the demo model's training run.
//
// Headline metrics, the 5×5 confusion matrix, and the per-class report are
// constant illustrative data shipped with the demo. They describe the offline
// TF-IDF + MLP training run, not the keyword engine, and nothing here is
// recomputed or checked against live classifications.

use serde::Serialize;

use crate::category::Category;

/// Test-set accuracy from the training run.
pub const ACCURACY: f64 = 0.97;
/// Weighted-average F1 across the five classes.
pub const WEIGHTED_F1: f64 = 0.97;
/// Number of support tickets in the training dataset.
pub const TRAINING_SAMPLES: u32 = 8_469;

/// Confusion matrix label order: alphabetical by short label, as reported
/// by the training run (not the keyword-table order).
pub const MATRIX_CATEGORIES: [Category; 5] = [
    Category::BillingInquiry,
    Category::CancellationRequest,
    Category::ProductInquiry,
    Category::RefundRequest,
    Category::TechnicalIssue,
];

/// The 5×5 confusion matrix: rows are actual labels, columns predicted,
/// both in `MATRIX_CATEGORIES` order.
#[derive(Debug, Clone, Serialize)]
pub struct ConfusionMatrix {
    pub counts: [[u32; 5]; 5],
}

impl ConfusionMatrix {
    /// The matrix from the shipped training run.
    pub fn reference() -> Self {
        Self {
            counts: [
                [1131, 3, 4, 4, 2],
                [4, 1151, 13, 11, 7],
                [3, 14, 1123, 6, 3],
                [6, 17, 10, 1179, 14],
                [6, 11, 12, 17, 1177],
            ],
        }
    }

    /// Largest single cell, used to scale the terminal heat shading.
    pub fn max_cell(&self) -> u32 {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().flat_map(|row| row.iter()).sum()
    }

    /// Sum of the diagonal — the correctly classified samples.
    pub fn correct(&self) -> u32 {
        (0..5).map(|i| self.counts[i][i]).sum()
    }
}

/// One row of the per-class classification report.
#[derive(Debug, Clone, Serialize)]
pub struct ClassMetrics {
    pub category: Category,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: u32,
}

/// Per-class precision/recall/F1/support from the training run, in
/// alphabetical category order.
pub fn class_report() -> Vec<ClassMetrics> {
    let row = |category, precision, recall, f1, support| ClassMetrics {
        category,
        precision,
        recall,
        f1,
        support,
    };

    vec![
        row(Category::BillingInquiry, 0.98, 0.99, 0.98, 1144),
        row(Category::CancellationRequest, 0.96, 0.97, 0.97, 1186),
        row(Category::ProductInquiry, 0.96, 0.98, 0.97, 1149),
        row(Category::RefundRequest, 0.98, 0.96, 0.97, 1226),
        row(Category::TechnicalIssue, 0.98, 0.96, 0.97, 1223),
    ]
}

/// Everything the `report` command shows, bundled for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct ModelEvaluation {
    pub accuracy: f64,
    pub weighted_f1: f64,
    pub training_samples: u32,
    pub categories: u32,
    pub confusion_matrix: ConfusionMatrix,
    pub class_report: Vec<ClassMetrics>,
}

impl ModelEvaluation {
    pub fn reference() -> Self {
        Self {
            accuracy: ACCURACY,
            weighted_f1: WEIGHTED_F1,
            training_samples: TRAINING_SAMPLES,
            categories: Category::ALL.len() as u32,
            confusion_matrix: ConfusionMatrix::reference(),
            class_report: class_report(),
        }
    }
}
