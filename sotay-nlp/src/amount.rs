//! Vietnamese amount notations ("50k", "1tr2", "15 triệu", "50000đ",
//! "1,000,000") and extraction of the first valid amount in a message.

use regex::{Captures, Regex};
use sotay_core::{MAX_AMOUNT, MIN_AMOUNT};
use std::sync::OnceLock;
use tracing::debug;

struct Notation {
    name: &'static str,
    source: &'static str,
    multiplier: u64,
    /// Second capture group is a single tenths digit ("1tr2" = 1.2 million)
    has_decimal: bool,
}

/// Highest priority first. Sources are matched against lowercased text.
const NOTATIONS: [Notation; 6] = [
    Notation {
        name: "tr",
        source: r"([0-9]+)tr([0-9])?",
        multiplier: 1_000_000,
        has_decimal: true,
    },
    Notation {
        name: "triệu",
        source: r"([0-9]+)\s*triệu\s*([0-9])?",
        multiplier: 1_000_000,
        has_decimal: true,
    },
    Notation {
        name: "k",
        source: r"([0-9]+)k",
        multiplier: 1_000,
        has_decimal: false,
    },
    Notation {
        name: "nghìn",
        source: r"([0-9]+)\s*nghìn",
        multiplier: 1_000,
        has_decimal: false,
    },
    Notation {
        name: "ngàn",
        source: r"([0-9]+)\s*ngàn",
        multiplier: 1_000,
        has_decimal: false,
    },
    // Comma grouping needs at least one ",ddd" group, otherwise the whole
    // digit run is taken. The currency suffix must end a word ("50 đi" keeps "đi").
    // Intentionally stricter than stripping any "đ" after a number, which
    // would eat the start of "đi" and leave "50000 đi chợ" with just ["chợ"].
    Notation {
        name: "plain",
        source: r"([0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\s*(?:đồng|đ|vnd)\b)?",
        multiplier: 1,
        has_decimal: false,
    },
];

/// A compiled amount notation
pub(crate) struct AmountPattern {
    pub(crate) name: &'static str,
    pub(crate) regex: Regex,
    multiplier: u64,
    has_decimal: bool,
}

impl AmountPattern {
    /// Amount in VND for one match, `None` if the digits overflow
    fn value(&self, caps: &Captures<'_>) -> Option<u64> {
        let digits = caps.get(1)?.as_str().replace(',', "");
        let whole: u64 = digits.parse().ok()?;
        let mut amount = whole.checked_mul(self.multiplier)?;

        if self.has_decimal {
            if let Some(tenths) = caps.get(2) {
                let tenths: u64 = tenths.as_str().parse().ok()?;
                amount = amount.checked_add(tenths * (self.multiplier / 10))?;
            }
        }

        Some(amount)
    }
}

/// Notation table in priority order, compiled once per process
pub(crate) fn amount_patterns() -> &'static [AmountPattern] {
    static PATTERNS: OnceLock<Vec<AmountPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        NOTATIONS
            .iter()
            .map(|n| AmountPattern {
                name: n.name,
                regex: Regex::new(n.source).expect("invalid amount notation regex"),
                multiplier: n.multiplier,
                has_decimal: n.has_decimal,
            })
            .collect()
    })
}

/// Find the amount a message refers to.
///
/// Notations are tried in priority order; within one notation, matches are
/// taken left to right. The first amount inside `[MIN_AMOUNT, MAX_AMOUNT]`
/// wins and out-of-range candidates are skipped.
pub fn parse_amount(text: &str) -> Option<u64> {
    let normalized = text.trim().to_lowercase();

    for pattern in amount_patterns() {
        for caps in pattern.regex.captures_iter(&normalized) {
            let Some(amount) = pattern.value(&caps) else {
                continue;
            };
            if (MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
                debug!(notation = pattern.name, amount, "amount recognized");
                return Some(amount);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_notation() {
        assert_eq!(parse_amount("50k"), Some(50_000));
        assert_eq!(parse_amount("1tr2"), Some(1_200_000));
        assert_eq!(parse_amount("2tr"), Some(2_000_000));
        assert_eq!(parse_amount("1 triệu 5"), Some(1_500_000));
        assert_eq!(parse_amount("15 triệu"), Some(15_000_000));
        assert_eq!(parse_amount("100 nghìn"), Some(100_000));
        assert_eq!(parse_amount("50 ngàn"), Some(50_000));
        assert_eq!(parse_amount("50000đ"), Some(50_000));
        assert_eq!(parse_amount("50000 đồng"), Some(50_000));
        assert_eq!(parse_amount("75000 vnd"), Some(75_000));
        assert_eq!(parse_amount("1,000,000"), Some(1_000_000));
    }

    #[test]
    fn test_uppercase_and_padding() {
        assert_eq!(parse_amount("  Siêu thị 1TR2  "), Some(1_200_000));
        assert_eq!(parse_amount("CAFE 35K"), Some(35_000));
    }

    #[test]
    fn test_no_amount() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("xin chào"), None);
        assert_eq!(parse_amount("không có số tiền"), None);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(parse_amount("50"), None);
        assert_eq!(parse_amount("2000000000"), None);
        assert_eq!(parse_amount("99999999999999999999999"), None);
        assert_eq!(parse_amount("1000000000"), Some(1_000_000_000));
        assert_eq!(parse_amount("100"), Some(100));
    }

    #[test]
    fn test_out_of_range_falls_through_to_later_notation() {
        // 2000tr is 2 billion; the plain notation then reads "2000"
        assert_eq!(parse_amount("2000tr"), Some(2_000));
    }

    #[test]
    fn test_priority_beats_position() {
        // "k" outranks plain numbers even when it appears later
        assert_eq!(parse_amount("mua 3 cái áo 450k"), Some(450_000));
        // first valid match within a notation is taken left to right
        assert_eq!(parse_amount("cafe 20k bánh 15k"), Some(20_000));
    }

    #[test]
    fn test_invalid_match_skipped_within_notation() {
        // 0k is below the minimum; the second "k" match is used
        assert_eq!(parse_amount("0k rồi 30k"), Some(30_000));
    }

    #[test]
    fn test_decimal_is_exact() {
        for d in 0..10u64 {
            let text = format!("3tr{d}");
            assert_eq!(parse_amount(&text), Some(3_000_000 + d * 100_000));
        }
    }
}
