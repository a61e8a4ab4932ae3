//! Suggested categories and payment sources offered by entry forms.
//!
//! The lists are hints only. Records naming anything else are still
//! aggregated under their literal category or source.

use crate::transaction::TransactionType;

const INCOME_CATEGORIES: &[&str] = &[
    "Freelancing (Mostaql)",
    "Pocket Money",
    "Salary",
    "Gift",
    "Business",
    "Bonus",
    "Refund",
    "Other",
];

const EXPENSE_CATEGORIES: &[&str] = &[
    "Personal",
    "University",
    "Food",
    "Transport",
    "Subscriptions",
    "Entertainment",
    "Health",
    "Books",
    "Rent",
    "Bills",
    "Gifts",
    "Other",
];

const INVESTMENT_CATEGORIES: &[&str] = &[
    "Gold",
    "Stock Trading",
    "Crypto",
    "Real Estate",
    "NFT",
    "Other",
];

const TRANSFER_CATEGORIES: &[&str] = &["Transfer"];

pub const KNOWN_SOURCES: &[&str] = &[
    "Vodafone Cash",
    "InstaPay",
    "National Bank of Egypt",
    "Banque Misr",
    "CIB Bank",
    "Apple Pay",
    "Cash",
    "Wallet",
    "Credit Card (Barq)",
    "Other",
];

pub fn default_categories(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
        TransactionType::Investment => INVESTMENT_CATEGORIES,
        TransactionType::Transfer => TRANSFER_CATEGORIES,
    }
}

/// First suggestion for a freshly selected kind.
pub fn default_category(kind: TransactionType) -> &'static str {
    default_categories(kind)[0]
}

pub fn is_listed_category(kind: TransactionType, category: &str) -> bool {
    default_categories(kind).contains(&category)
}

pub fn is_known_source(source: &str) -> bool {
    KNOWN_SOURCES.contains(&source)
}
