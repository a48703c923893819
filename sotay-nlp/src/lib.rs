//! sotay-nlp: Vietnamese chat-message parser (amount, keywords, category match)

pub mod amount;
pub mod keywords;
pub mod matcher;
pub mod parser;
pub mod preview;

pub use amount::parse_amount;
pub use keywords::extract_keywords;
pub use matcher::{find_category, rank_categories, score_category};
pub use parser::{INCOME_INDICATORS, infer_type, parse_message};
pub use preview::{ParsePreview, draft_transaction, preview_message, resolve_category};
