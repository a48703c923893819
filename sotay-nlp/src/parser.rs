//! Chat message → parsed transaction fields.

use sotay_core::{Category, ParseError, ParseResult, ParsedMessage, TransactionType};
use tracing::debug;

use crate::amount::parse_amount;
use crate::keywords::extract_keywords;
use crate::matcher::find_category;

/// Fragments that mark a message as income when no category matched.
/// Matched by containment, so "bánh" counts as "bán".
pub const INCOME_INDICATORS: [&str; 6] = ["lương", "thưởng", "thu nhập", "lãi", "bán", "nhận"];

/// Guess the transaction type from keywords alone
pub fn infer_type<K: AsRef<str>>(keywords: &[K]) -> TransactionType {
    let is_income = keywords.iter().any(|keyword| {
        let keyword: &str = keyword.as_ref();
        INCOME_INDICATORS.iter().any(|ind| keyword.contains(ind))
    });

    if is_income {
        TransactionType::Income
    } else {
        TransactionType::Expense
    }
}

/// Parse a free-form message ("xăng 50k", "lương 15tr") against the given
/// categories.
///
/// The only failure is a message without a recognizable amount. An unmatched
/// category is a success with `matched_category: None`.
pub fn parse_message(input: &str, categories: &[Category]) -> ParseResult {
    let amount = parse_amount(input).ok_or(ParseError::AmountNotRecognized)?;
    let keywords = extract_keywords(input);
    let matched_category = find_category(&keywords, categories).cloned();

    let suggested_type = match &matched_category {
        Some(category) => category.kind,
        None => infer_type(&keywords),
    };

    debug!(
        amount,
        keywords = ?keywords,
        matched = matched_category.is_some(),
        %suggested_type,
        "message parsed"
    );

    Ok(ParsedMessage {
        amount,
        keywords,
        matched_category,
        suggested_type,
        raw_input: input.to_string(),
    })
}
