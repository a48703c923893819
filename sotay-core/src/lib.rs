//! sotay-core: shared types for the family finance notebook

pub mod category;
pub mod defaults;
pub mod message;

pub use category::{
    Category, TransactionType, categories_of_type, fallback_category, sort_categories,
};
pub use defaults::default_categories;
pub use message::{
    MAX_AMOUNT, MIN_AMOUNT, ParseError, ParseResponse, ParseResult, ParsedMessage,
    TransactionDraft,
};
