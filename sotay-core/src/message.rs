//! Parse outcome types and the transaction draft handed back to callers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::{Category, TransactionType};

/// Smallest amount (VND) a message may carry
pub const MIN_AMOUNT: u64 = 100;
/// Largest amount (VND) a message may carry
pub const MAX_AMOUNT: u64 = 1_000_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Không thể nhận diện số tiền. Ví dụ đúng: \"xăng 50k\", \"siêu thị 1tr2\"")]
    AmountNotRecognized,

    #[error("Vui lòng nhập nội dung")]
    EmptyInput,

    #[error("Không tìm thấy danh mục mặc định cho loại {0}")]
    NoFallbackCategory(TransactionType),
}

/// A successfully parsed chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    /// Whole VND, always within `MIN_AMOUNT..=MAX_AMOUNT`
    pub amount: u64,
    pub keywords: Vec<String>,
    /// `None` when no category scored; callers pick their own fallback
    pub matched_category: Option<Category>,
    pub suggested_type: TransactionType,
    pub raw_input: String,
}

pub type ParseResult = Result<ParsedMessage, ParseError>;

/// JSON shape of a parse outcome: `success` plus either the parsed fields
/// or an `error` message.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ParseResponse {
    Parsed {
        success: bool,
        #[serde(flatten)]
        message: ParsedMessage,
    },
    Failed {
        success: bool,
        error: String,
    },
}

impl ParseResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResponse::Parsed { .. })
    }
}

impl From<ParseResult> for ParseResponse {
    fn from(result: ParseResult) -> Self {
        match result {
            Ok(message) => ParseResponse::Parsed {
                success: true,
                message,
            },
            Err(err) => ParseResponse::Failed {
                success: false,
                error: err.to_string(),
            },
        }
    }
}

/// A transaction ready to be persisted by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: u64,
    pub category_id: String,
    pub category_name: String,
    /// Extracted keywords joined by a single space
    pub description: String,
    pub raw_input: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Signed amount: negative for expenses
    pub fn signed_amount(&self) -> i64 {
        let amount = self.amount as i64;
        match self.kind {
            TransactionType::Expense => -amount,
            TransactionType::Income => amount,
        }
    }
}
