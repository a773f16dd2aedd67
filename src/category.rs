// Ticket categories — the closed set of labels the demo model predicts.
//
// The set is fixed at five: it mirrors the label space the model was
// trained on and is never extended at runtime. Other modules iterate
// over `Category::ALL` so every category is scored on every request.

use serde::{Deserialize, Serialize};

/// One of the five ticket classification labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Billing inquiry")]
    BillingInquiry,
    #[serde(rename = "Technical issue")]
    TechnicalIssue,
    #[serde(rename = "Refund request")]
    RefundRequest,
    #[serde(rename = "Cancellation request")]
    CancellationRequest,
    #[serde(rename = "Product inquiry")]
    ProductInquiry,
}

impl Category {
    /// Every category, in declaration order. Declaration order is also the
    /// tie-break order when two categories end up with identical probability.
    pub const ALL: [Category; 5] = [
        Category::BillingInquiry,
        Category::TechnicalIssue,
        Category::RefundRequest,
        Category::CancellationRequest,
        Category::ProductInquiry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BillingInquiry => "Billing inquiry",
            Category::TechnicalIssue => "Technical issue",
            Category::RefundRequest => "Refund request",
            Category::CancellationRequest => "Cancellation request",
            Category::ProductInquiry => "Product inquiry",
        }
    }

    /// Short label used as a column header in the confusion matrix grid.
    pub fn short_label(&self) -> &'static str {
        match self {
            Category::BillingInquiry => "Billing",
            Category::TechnicalIssue => "Technical",
            Category::RefundRequest => "Refund",
            Category::CancellationRequest => "Cancel",
            Category::ProductInquiry => "Product",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_five_distinct_categories() {
        let unique: std::collections::HashSet<_> = Category::ALL.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_display_matches_as_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&Category::RefundRequest).unwrap();
        assert_eq!(json, "\"Refund request\"");

        let parsed: Category = serde_json::from_str("\"Billing inquiry\"").unwrap();
        assert_eq!(parsed, Category::BillingInquiry);
    }
}
