// Colored terminal output for classification results and evaluation tables.
//
// This module handles all terminal-specific formatting: colors, bars,
// tables. The main.rs command handlers delegate here.

use colored::{ColoredString, Colorize};

use crate::category::Category;
use crate::evaluation::{ModelEvaluation, MATRIX_CATEGORIES};
use crate::keywords::KeywordTable;
use crate::scoring::distribution::Classification;

/// Display a classification result: ticket preview, predicted category,
/// and the full probability breakdown as a bar chart.
pub fn display_classification(text: &str, result: &Classification) {
    let preview = super::truncate_chars(text.trim(), 120);
    println!("\n  Ticket: \"{}\"", preview.dimmed());
    println!(
        "\n  Predicted: {}  ({} confidence)",
        colorize_category(result.category).bold(),
        format!("{:.1}%", result.confidence * 100.0).bold()
    );
    println!();

    let bar_width: usize = 20;

    for entry in &result.ranked {
        // Build the bar: filled portion + empty portion
        let filled = (entry.probability * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        println!(
            "  {:<22} {} {:>5.1}%",
            colorize_category(entry.category),
            bar.dimmed(),
            entry.probability * 100.0
        );
    }
    println!();
}

/// Display the active keyword table: each category with its trigger list.
pub fn display_keyword_table(table: &KeywordTable) {
    println!("\n{}", "=== Keyword Table ===".bold());
    println!();

    for entry in table.iter() {
        println!(
            "  {} ({} triggers)",
            colorize_category(entry.category).bold(),
            entry.triggers.len()
        );
        println!("      {}", entry.triggers.join(", ").dimmed());
        println!();
    }
}

/// Display the full model evaluation: headline metrics, confusion matrix,
/// and the per-class classification report.
pub fn display_evaluation(eval: &ModelEvaluation) {
    println!("\n{}", "=== Model Evaluation ===".bold());
    println!();
    println!(
        "  Accuracy: {}   Weighted F1: {}   Training samples: {}   Categories: {}",
        format!("{:.0}%", eval.accuracy * 100.0).bold(),
        format!("{:.2}", eval.weighted_f1).bold(),
        eval.training_samples.to_string().bold(),
        eval.categories.to_string().bold()
    );

    display_confusion_matrix(eval);
    display_class_report(eval);
}

fn display_confusion_matrix(eval: &ModelEvaluation) {
    let matrix = &eval.confusion_matrix;
    let max_cell = matrix.max_cell();

    println!("\n{}", "=== Confusion Matrix (actual × predicted) ===".bold());
    println!();

    // Header row: predicted labels
    print!("  {:>10}", "");
    for category in MATRIX_CATEGORIES {
        print!(" {:>9}", category.short_label().dimmed());
    }
    println!();

    for (i, row) in matrix.counts.iter().enumerate() {
        print!("  {:>10}", MATRIX_CATEGORIES[i].short_label().dimmed());
        for (j, &value) in row.iter().enumerate() {
            let cell = format!("{value:>9}");
            // Diagonal cells are the hits; bright off-diagonal cells mark
            // the confusion pairs worth a second look
            let colored_cell = if i == j {
                cell.green().bold()
            } else if value * 100 > max_cell {
                cell.yellow()
            } else {
                cell.normal()
            };
            print!(" {colored_cell}");
        }
        println!();
    }

    println!(
        "\n  {} of {} samples on the diagonal",
        matrix.correct().to_string().bold(),
        matrix.total()
    );
}

fn display_class_report(eval: &ModelEvaluation) {
    println!("\n{}", "=== Classification Report ===".bold());
    println!();
    println!(
        "  {:<22} {:>9} {:>9} {:>9} {:>9}",
        "Category".dimmed(),
        "Precision".dimmed(),
        "Recall".dimmed(),
        "F1".dimmed(),
        "Support".dimmed(),
    );
    println!("  {}", "-".repeat(62).dimmed());

    for row in &eval.class_report {
        println!(
            "  {:<22} {:>9.2} {:>9.2} {:>9.2} {:>9}",
            colorize_category(row.category),
            row.precision,
            row.recall,
            row.f1,
            row.support,
        );
    }
    println!();
}

/// Colorize a category label. One fixed color per category, consistent
/// across every view so results stay scannable.
fn colorize_category(category: Category) -> ColoredString {
    let label = category.as_str();
    match category {
        Category::BillingInquiry => label.blue(),
        Category::TechnicalIssue => label.red(),
        Category::RefundRequest => label.yellow(),
        Category::CancellationRequest => label.magenta(),
        Category::ProductInquiry => label.green(),
    }
}
