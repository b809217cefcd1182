use crate::domain::email::{Category, Priority};

const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "urgent",
    "immediately",
    "asap",
    "deadline",
    "failed",
    "error",
    "issue",
    "critical",
    "important",
    "payment",
    "invoice",
    "meeting",
    "schedule",
    "client",
    "project",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "client", "project", "meeting", "contract", "invoice", "payment", "report", "proposal",
    "deadline",
];

const PERSONAL_KEYWORDS: &[&str] = &[
    "friend", "family", "birthday", "party", "hangout", "dinner", "call me", "see you", "miss you",
];

const PROMO_KEYWORDS: &[&str] = &[
    "discount",
    "offer",
    "sale",
    "promotion",
    "coupon",
    "deal",
    "subscribe",
    "newsletter",
    "limited time",
];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Case-insensitive substring matching against the fixed keyword tables.
/// Category lists are checked in precedence order (business, then personal,
/// then promotion); the first list with a hit wins.
pub fn categorize_text(text: &str) -> (Priority, Category) {
    let lower = text.to_lowercase();

    let priority = if contains_any(&lower, HIGH_PRIORITY_KEYWORDS) {
        Priority::High
    } else {
        Priority::Normal
    };

    let category = if contains_any(&lower, BUSINESS_KEYWORDS) {
        Category::Business
    } else if contains_any(&lower, PERSONAL_KEYWORDS) {
        Category::Personal
    } else if contains_any(&lower, PROMO_KEYWORDS) {
        Category::Promotion
    } else {
        Category::Other
    };

    (priority, category)
}
