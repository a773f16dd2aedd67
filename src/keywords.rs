// Keyword table — the static category -> trigger-substring configuration.
//
// Each category carries an ordered list of lowercase trigger substrings.
// The table is built once (default or loaded from a JSON override file)
// and is read-only afterwards; the scoring engine only ever borrows it.
//
// Matching is plain substring containment against the lowercased ticket
// text, with no tokenization and no word boundaries, so "fix" also matches
// inside "suffix". That is the demo model's documented behavior.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Trigger substrings for a single category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTriggers {
    pub category: Category,
    pub triggers: Vec<String>,
}

/// The full keyword table: one entry per category, in category order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTable {
    entries: Vec<CategoryTriggers>,
}

impl Default for KeywordTable {
    /// The built-in table shipped with the demo model.
    fn default() -> Self {
        let table = |category, triggers: &[&str]| CategoryTriggers {
            category,
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
        };

        Self {
            entries: vec![
                table(
                    Category::BillingInquiry,
                    &[
                        "bill",
                        "payment",
                        "charge",
                        "invoice",
                        "account",
                        "subscription",
                        "price",
                        "cost",
                        "fee",
                    ],
                ),
                table(
                    Category::TechnicalIssue,
                    &[
                        "error",
                        "bug",
                        "crash",
                        "not working",
                        "problem",
                        "issue",
                        "broken",
                        "fix",
                        "setup",
                        "install",
                        "network",
                        "slow",
                    ],
                ),
                table(
                    Category::RefundRequest,
                    &[
                        "refund",
                        "money back",
                        "return",
                        "reimburse",
                        "cancel order",
                        "want my money",
                    ],
                ),
                table(
                    Category::CancellationRequest,
                    &[
                        "cancel",
                        "unsubscribe",
                        "stop",
                        "end subscription",
                        "terminate",
                        "close account",
                    ],
                ),
                table(
                    Category::ProductInquiry,
                    &[
                        "feature",
                        "how to",
                        "what is",
                        "does it",
                        "can it",
                        "specifications",
                        "compatible",
                        "support",
                    ],
                ),
            ],
        }
    }
}

impl KeywordTable {
    /// Load a keyword table override from a JSON file.
    ///
    /// The file format is the serde form of this struct:
    /// `{"entries": [{"category": "Billing inquiry", "triggers": ["bill", ...]}, ...]}`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyword table from {}", path.display()))?;
        let table: KeywordTable = serde_json::from_str(&json)
            .with_context(|| format!("Invalid keyword table JSON in {}", path.display()))?;
        table.validate()?;
        Ok(table)
    }

    /// Check the table covers every category exactly once with usable triggers.
    ///
    /// Triggers must be non-empty and already lowercase; matching never
    /// lowercases the table side, only the ticket text.
    pub fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            let count = self
                .entries
                .iter()
                .filter(|e| e.category == category)
                .count();
            if count != 1 {
                anyhow::bail!(
                    "Keyword table must list \"{category}\" exactly once (found {count})"
                );
            }
        }

        for entry in &self.entries {
            if entry.triggers.is_empty() {
                anyhow::bail!("Keyword table entry \"{}\" has no triggers", entry.category);
            }
            for trigger in &entry.triggers {
                if trigger.is_empty() {
                    anyhow::bail!("Keyword table entry \"{}\" has an empty trigger", entry.category);
                }
                if *trigger != trigger.to_lowercase() {
                    anyhow::bail!(
                        "Trigger \"{trigger}\" for \"{}\" must be lowercase",
                        entry.category
                    );
                }
            }
        }

        Ok(())
    }

    /// The trigger list for a category. A category missing from the table
    /// scores as an empty list; `validate` rules that out for every table
    /// handed to the engine.
    pub fn triggers(&self, category: Category) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.triggers.as_slice())
            .unwrap_or(&[])
    }

    /// Count how many of a category's triggers occur in the lowercased text.
    /// Each trigger contributes at most 1, no matter how often it repeats.
    pub fn match_count(&self, category: Category, lower_text: &str) -> usize {
        self.triggers(category)
            .iter()
            .filter(|trigger| lower_text.contains(trigger.as_str()))
            .count()
    }

    /// Iterate entries in table order (category declaration order for the
    /// default table).
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTriggers> {
        self.entries.iter()
    }
}
