// Unit tests for the scoring pipeline with the perturbation pinned.
//
// A constant test generator replaces the uncertainty draw so the keyword
// scoring and two-pass normalization math can be verified exactly:
// normalize -> clamp to the 5% floor -> rank -> renormalize.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use triage::category::Category;
use triage::output::truncate_chars;
use triage::scoring::classifier::TicketClassifier;
use triage::scoring::distribution::PROBABILITY_FLOOR;

/// Test generator yielding a constant stream. `ConstRng(0)` pins every
/// uncertainty draw to exactly 0.0.
struct ConstRng(u64);

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.0.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

fn probability_of(result: &triage::scoring::distribution::Classification, category: Category) -> f64 {
    result
        .ranked
        .iter()
        .find(|p| p.category == category)
        .map(|p| p.probability)
        .expect("category missing from ranked distribution")
}

// ============================================================
// Pinned perturbation: keyword scores drive the ranking
// ============================================================

#[test]
fn refund_only_text_ranks_refund_first() {
    let classifier = TicketClassifier::default();
    let mut rng = ConstRng(0);

    let result = classifier.classify_with("refund", &mut rng);

    // Raw scores: Refund 1, everything else 0. After the first pass the
    // distribution is [1, 0, 0, 0, 0]; the zeros clamp to 0.05, the
    // clamped sum is 1.2, so the winner lands on 1/1.2 and the rest on
    // 0.05/1.2.
    assert_eq!(result.category, Category::RefundRequest);
    assert!((result.confidence - 1.0 / 1.2).abs() < 1e-9);
    for entry in &result.ranked[1..] {
        assert!((entry.probability - 0.05 / 1.2).abs() < 1e-9);
    }
}

#[test]
fn cancel_and_refund_beat_unmatched_categories() {
    let classifier = TicketClassifier::default();
    let mut rng = ConstRng(0);

    let text = "i want to cancel my plan and get a refund";
    let raw = classifier.raw_scores(text);
    let raw_of = |category| {
        raw.iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap()
    };

    assert_eq!(raw_of(Category::RefundRequest), 1);
    assert_eq!(raw_of(Category::CancellationRequest), 1);
    assert_eq!(raw_of(Category::BillingInquiry), 0);
    assert_eq!(raw_of(Category::TechnicalIssue), 0);
    assert_eq!(raw_of(Category::ProductInquiry), 0);

    let result = classifier.classify_with(text, &mut rng);

    // [0.5, 0.5, 0.05, 0.05, 0.05] after the clamp; renormalized by 1.15.
    let refund = probability_of(&result, Category::RefundRequest);
    let cancel = probability_of(&result, Category::CancellationRequest);
    assert!((refund - 0.5 / 1.15).abs() < 1e-9);
    assert!((cancel - 0.5 / 1.15).abs() < 1e-9);

    for category in [
        Category::BillingInquiry,
        Category::TechnicalIssue,
        Category::ProductInquiry,
    ] {
        let p = probability_of(&result, category);
        assert!(refund > p && cancel > p);
        assert!((p - 0.05 / 1.15).abs() < 1e-9);
    }
}

#[test]
fn empty_text_with_pinned_draws_is_uniform() {
    let classifier = TicketClassifier::default();
    let mut rng = ConstRng(0);

    // All raw scores 0 and all draws 0: the zero-sum guard divides by 1,
    // everything clamps to the floor, and the rescale yields 0.2 each.
    let result = classifier.classify_with("", &mut rng);
    for entry in &result.ranked {
        assert!((entry.probability - 0.2).abs() < 1e-9);
    }
}

#[test]
fn empty_text_with_equal_nonzero_draws_is_uniform() {
    let classifier = TicketClassifier::default();
    // Any constant stream gives every category the same perturbation, so
    // the distribution must still come out uniform.
    let mut rng = ConstRng(0x8000_0000_0000_0000);

    let result = classifier.classify_with("", &mut rng);
    for entry in &result.ranked {
        assert!(
            (entry.probability - 0.2).abs() < 1e-9,
            "Expected uniform fifths, got {}",
            entry.probability
        );
    }
}

#[test]
fn pinned_ties_keep_table_order() {
    let classifier = TicketClassifier::default();
    let mut rng = ConstRng(0);

    let result = classifier.classify_with("", &mut rng);
    let order: Vec<Category> = result.ranked.iter().map(|p| p.category).collect();
    assert_eq!(order, Category::ALL.to_vec());
}

// ============================================================
// Floor behavior
// ============================================================

#[test]
fn unmatched_categories_never_drop_below_rescaled_floor() {
    let classifier = TicketClassifier::default();
    let mut rng = ConstRng(0);

    // Heavy billing ticket: bill, payment, charge, invoice, fee = 5 matches
    let text = "the bill lists a payment charge, see invoice for the fee";
    let result = classifier.classify_with(text, &mut rng);

    assert_eq!(result.category, Category::BillingInquiry);

    // Worst case rescale divisor with five categories is 1 + 4 * 0.05
    let min_reportable = PROBABILITY_FLOOR / 1.2;
    for entry in &result.ranked {
        assert!(entry.probability >= min_reportable - 1e-12);
    }
}

// ============================================================
// Seeded generator: reproducible runs
// ============================================================

#[test]
fn same_seed_same_result() {
    let classifier = TicketClassifier::default();
    let text = "my order arrived broken and I want my money back";

    let a = classifier.classify_with(text, &mut StdRng::seed_from_u64(42));
    let b = classifier.classify_with(text, &mut StdRng::seed_from_u64(42));

    assert_eq!(a.category, b.category);
    assert_eq!(a.confidence, b.confidence);
    for (x, y) in a.ranked.iter().zip(b.ranked.iter()) {
        assert_eq!(x.category, y.category);
        assert_eq!(x.probability, y.probability);
    }
}

#[test]
fn seeded_run_still_satisfies_invariants() {
    let classifier = TicketClassifier::default();
    let result =
        classifier.classify_with("why is the app so slow", &mut StdRng::seed_from_u64(7));

    let sum: f64 = result.ranked.iter().map(|p| p.probability).sum();
    assert!((sum - 1.0).abs() < 1e-9);
    for pair in result.ranked.windows(2) {
        assert!(pair[0].probability >= pair[1].probability);
    }
}

// ============================================================
// truncate_chars — UTF-8 safe ticket previews
// ============================================================

#[test]
fn truncate_within_limit() {
    assert_eq!(truncate_chars("short ticket", 120), "short ticket");
}

#[test]
fn truncate_over_limit() {
    assert_eq!(truncate_chars("hello!", 5), "hello...");
}

#[test]
fn truncate_emoji_safe() {
    // "Hello 🌍!" = 8 chars (emoji is 1 char, 4 bytes)
    let text = "Hello 🌍!";
    assert_eq!(truncate_chars(text, 7), "Hello 🌍...");
}
