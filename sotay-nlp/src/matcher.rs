//! Scored keyword matching of a message against the family's categories.

use sotay_core::Category;
use tracing::{debug, trace};

const NAME_EXACT: u32 = 5;
const NAME_PARTIAL: u32 = 3;
const KEYWORD_EXACT: u32 = 4;
const KEYWORD_PARTIAL: u32 = 2;

/// Shorter input keywords are ignored entirely
const MIN_MATCH_CHARS: usize = 2;
/// Substring rules only apply to strings at least this long
const MIN_PARTIAL_CHARS: usize = 3;

/// Catch-all categories only win when nothing specific scores
const DEFAULT_CATEGORY_WEIGHT: f64 = 0.5;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Score one category against the extracted keywords.
///
/// Per keyword: +5 for an exact name match, otherwise +3 when the keyword
/// (3+ chars) is part of the name. Per category keyword entry: +4 on
/// equality, otherwise +2 when the keyword (3+ chars) is inside the entry,
/// otherwise +2 when the entry (3+ chars) is inside the keyword. Name and
/// entry rules stack. Default categories get half the total.
pub fn score_category<K: AsRef<str>>(keywords: &[K], category: &Category) -> f64 {
    let name = category.name.to_lowercase();
    let mut score = 0u32;

    for keyword in keywords {
        let keyword: &str = keyword.as_ref();
        let len = char_len(keyword);
        if len < MIN_MATCH_CHARS {
            continue;
        }

        if name == keyword {
            score += NAME_EXACT;
        } else if len >= MIN_PARTIAL_CHARS && name.contains(keyword) {
            score += NAME_PARTIAL;
        }

        for entry in &category.keywords {
            if entry == keyword {
                score += KEYWORD_EXACT;
            } else if len >= MIN_PARTIAL_CHARS && entry.contains(keyword) {
                score += KEYWORD_PARTIAL;
            } else if char_len(entry) >= MIN_PARTIAL_CHARS && keyword.contains(entry.as_str()) {
                score += KEYWORD_PARTIAL;
            }
        }
    }

    let score = f64::from(score);
    if category.is_default {
        score * DEFAULT_CATEGORY_WEIGHT
    } else {
        score
    }
}

/// Best-scoring category, or `None` when nothing scores above zero.
///
/// Categories are visited in the order given; a later category only takes
/// over on a strictly higher score, so the earliest one wins ties.
pub fn find_category<'a, K: AsRef<str>>(
    keywords: &[K],
    categories: &'a [Category],
) -> Option<&'a Category> {
    if keywords.is_empty() || categories.is_empty() {
        return None;
    }

    let mut best: Option<&Category> = None;
    let mut best_score = 0.0;

    for category in categories {
        let score = score_category(keywords, category);
        trace!(category = %category.name, score, "category scored");
        if score > best_score {
            best_score = score;
            best = Some(category);
        }
    }

    if let Some(category) = best {
        debug!(category = %category.name, score = best_score, "category matched");
    }
    best
}

/// Every category with a positive score, best first. Equal scores keep
/// the caller's order, so the head of the list is what `find_category` picks.
pub fn rank_categories<'a, K: AsRef<str>>(
    keywords: &[K],
    categories: &'a [Category],
) -> Vec<(&'a Category, f64)> {
    let mut ranked: Vec<(&Category, f64)> = categories
        .iter()
        .map(|c| (c, score_category(keywords, c)))
        .filter(|(_, score)| *score > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use sotay_core::TransactionType;

    fn fuel_and_other() -> Vec<Category> {
        vec![
            Category::new("fuel", "Xăng xe", TransactionType::Expense, &["xăng", "đổ xăng"]),
            Category::new("other", "Khác", TransactionType::Expense, &[]).as_default(),
        ]
    }

    #[test]
    fn test_empty_inputs() {
        let cats = fuel_and_other();
        assert!(find_category::<&str>(&[], &cats).is_none());
        assert!(find_category(&["xăng"], &[]).is_none());
    }

    #[test]
    fn test_specific_category_matches() {
        let cats = fuel_and_other();
        let found = find_category(&["xăng"], &cats).unwrap();
        assert_eq!(found.id, "fuel");
        // name partial 3 + exact entry 4 + "đổ xăng" partial 2
        assert_eq!(score_category(&["xăng"], &cats[0]), 9.0);
        assert_eq!(score_category(&["xăng"], &cats[1]), 0.0);
    }

    #[test]
    fn test_exact_name_match() {
        let cat = Category::new("c", "Lương", TransactionType::Income, &[]);
        assert_eq!(score_category(&["lương"], &cat), 5.0);
        // exact name does not also count as a partial name match
        assert_eq!(score_category(&["lươ"], &cat), 3.0);
    }

    #[test]
    fn test_short_keywords_skip_partial_rules() {
        let cat = Category::new("c", "Ăn uống", TransactionType::Expense, &["ăn sáng"]);
        // "ăn" is 2 chars: too short for either substring rule
        assert_eq!(score_category(&["ăn"], &cat), 0.0);
        // single-char keywords are ignored even on exact entry matches
        let cat = Category::new("c", "Khác", TransactionType::Expense, &["x"]);
        assert_eq!(score_category(&["x"], &cat), 0.0);
    }

    #[test]
    fn test_entry_inside_keyword() {
        let cat = Category::new("c", "Giải trí", TransactionType::Expense, &["gym"]);
        assert_eq!(score_category(&["gymnasium"], &cat), 2.0);
    }

    #[test]
    fn test_entry_rules_are_exclusive_per_entry() {
        // "cafe" equals the entry, so the substring rules do not also fire
        let cat = Category::new("c", "Đồ uống", TransactionType::Expense, &["cafe"]);
        assert_eq!(score_category(&["cafe"], &cat), 4.0);
    }

    #[test]
    fn test_default_category_halved() {
        let cat = Category::new("d", "Thu nhập khác", TransactionType::Income, &["quà"]).as_default();
        assert_eq!(score_category(&["quà"], &cat), 2.0);
    }

    #[test]
    fn test_default_loses_to_specific_on_equal_raw_score() {
        let cats = vec![
            Category::new("d", "Khác", TransactionType::Expense, &["quà"]).as_default(),
            Category::new("g", "Lễ tết", TransactionType::Expense, &["quà"]),
        ];
        assert_eq!(find_category(&["quà"], &cats).unwrap().id, "g");
    }

    #[test]
    fn test_first_category_wins_ties() {
        let cats = vec![
            Category::new("a", "Đi chợ", TransactionType::Expense, &["rau"]),
            Category::new("b", "Ăn uống", TransactionType::Expense, &["rau"]),
        ];
        assert_eq!(find_category(&["rau"], &cats).unwrap().id, "a");

        let reversed: Vec<Category> = cats.into_iter().rev().collect();
        assert_eq!(find_category(&["rau"], &reversed).unwrap().id, "b");
    }

    #[test]
    fn test_no_positive_score_is_none() {
        let cats = fuel_and_other();
        assert!(find_category(&["karaoke"], &cats).is_none());
    }

    #[test]
    fn test_missing_fields_do_not_panic() {
        let cats = vec![Category::default()];
        assert!(find_category(&["xăng"], &cats).is_none());
    }

    #[test]
    fn test_rank_matches_find() {
        let cats = vec![
            Category::new("a", "Mua sắm", TransactionType::Expense, &["siêu thị"]),
            Category::new("b", "Y tế", TransactionType::Expense, &["siêu âm"]),
            Category::new("c", "Khác", TransactionType::Expense, &[]).as_default(),
        ];
        let keywords = ["siêu", "thị"];
        let ranked = rank_categories(&keywords, &cats);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0.id, "a");
        assert_eq!(ranked[0].1, 4.0);
        assert_eq!(ranked[1].1, 2.0);
        assert_eq!(find_category(&keywords, &cats).unwrap().id, ranked[0].0.id);
    }
}
