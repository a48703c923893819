//! What a transaction-entry endpoint does with a parse: resolve the final
//! category (matched, else the catch-all of the suggested type) and build a
//! preview or a draft for storage.

use chrono::NaiveDate;
use serde::Serialize;
use sotay_core::{
    Category, ParseError, ParsedMessage, TransactionDraft, TransactionType, categories_of_type,
    fallback_category,
};

use crate::parser::parse_message;

/// Preview shown before a chat entry is saved
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsePreview {
    pub amount: u64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Matched or fallback category; `None` only when the family has no
    /// catch-all for this type
    pub category: Option<Category>,
    /// True when `category` came from keyword matching
    pub matched: bool,
    pub keywords: Vec<String>,
    /// Every category of the suggested type, for the user to pick from
    pub all_categories: Vec<Category>,
}

/// Category a parsed message should be filed under
pub fn resolve_category(parsed: &ParsedMessage, categories: &[Category]) -> Option<Category> {
    parsed
        .matched_category
        .clone()
        .or_else(|| fallback_category(categories, parsed.suggested_type).cloned())
}

fn parse_non_empty(input: &str, categories: &[Category]) -> Result<ParsedMessage, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    parse_message(input, categories)
}

/// Parse without saving anything
pub fn preview_message(input: &str, categories: &[Category]) -> Result<ParsePreview, ParseError> {
    let parsed = parse_non_empty(input, categories)?;
    let category = resolve_category(&parsed, categories);
    let all_categories = categories_of_type(categories, parsed.suggested_type)
        .into_iter()
        .cloned()
        .collect();

    Ok(ParsePreview {
        amount: parsed.amount,
        kind: parsed.suggested_type,
        matched: parsed.matched_category.is_some(),
        category,
        keywords: parsed.keywords,
        all_categories,
    })
}

/// Build the transaction a chat entry creates. Fails when the amount is
/// missing or when no category, matched or fallback, is available.
pub fn draft_transaction(
    input: &str,
    categories: &[Category],
    date: NaiveDate,
) -> Result<TransactionDraft, ParseError> {
    let parsed = parse_non_empty(input, categories)?;
    let category = resolve_category(&parsed, categories)
        .ok_or(ParseError::NoFallbackCategory(parsed.suggested_type))?;

    Ok(TransactionDraft {
        kind: parsed.suggested_type,
        amount: parsed.amount,
        category_id: category.id,
        category_name: category.name,
        description: parsed.keywords.join(" "),
        raw_input: parsed.raw_input,
        date,
    })
}
