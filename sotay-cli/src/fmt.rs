use sotay_core::{TransactionDraft, TransactionType};

/// Format whole VND with dot thousands separators: 1.200.000đ
pub fn vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    format!("{grouped}đ")
}

/// One-line summary of a draft, e.g. `- 50.000đ | Xăng xe | xăng`
pub fn draft_line(draft: &TransactionDraft) -> String {
    let sign = match draft.kind {
        TransactionType::Expense => '-',
        TransactionType::Income => '+',
    };
    let description = if draft.description.is_empty() {
        "(không mô tả)"
    } else {
        draft.description.as_str()
    };
    format!(
        "{sign} {} | {} | {}",
        vnd(draft.amount),
        draft.category_name,
        description
    )
}
