//! Category types consumed by the message parser

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TransactionType {
    #[default]
    #[serde(rename = "expense")]
    Expense,
    #[serde(rename = "income")]
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }

    /// Vietnamese label shown to family members
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Expense => "Chi tiêu",
            TransactionType::Income => "Thu nhập",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "chi" => Ok(TransactionType::Expense),
            "income" | "thu" => Ok(TransactionType::Income),
            other => Err(format!("unknown transaction type: {other}")),
        }
    }
}

/// A family's transaction category.
///
/// Keywords are expected to be lowercased and trimmed already. Every field
/// falls back to an empty value when absent or `null`, so a half-filled
/// record from storage never fails a parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: TransactionType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    /// Catch-all category for its type; down-weighted when matching
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// `null` reads the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Category {
    /// Create a non-default category with the given keywords
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: TransactionType,
        keywords: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            is_default: false,
            icon: None,
            color: None,
        }
    }

    /// Mark this category as the catch-all for its type
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// Stable sort into listing order: specific categories before defaults,
/// then by name. Matching ties go to the earlier category, so this order
/// decides which of two equally scored categories wins.
pub fn sort_categories(categories: &mut [Category]) {
    categories.sort_by(|a, b| {
        a.is_default
            .cmp(&b.is_default)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Categories of one type, in caller order
pub fn categories_of_type(categories: &[Category], kind: TransactionType) -> Vec<&Category> {
    categories.iter().filter(|c| c.kind == kind).collect()
}

/// First catch-all category of the given type
pub fn fallback_category(categories: &[Category], kind: TransactionType) -> Option<&Category> {
    categories.iter().find(|c| c.is_default && c.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let cat: Category = serde_json::from_str(r#"{"type": "income"}"#).unwrap();
        assert_eq!(cat.name, "");
        assert!(cat.keywords.is_empty());
        assert!(!cat.is_default);
        assert_eq!(cat.kind, TransactionType::Income);

        let cat: Category = serde_json::from_str("{}").unwrap();
        assert_eq!(cat.kind, TransactionType::Expense);
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let cats: Vec<Category> = serde_json::from_str(
            r#"[
                {"id": "xang-xe", "name": "Xăng xe", "type": "expense", "keywords": ["xăng"]},
                {"id": "khac", "name": "Khác", "type": "expense", "keywords": null, "isDefault": true},
                {"id": null, "name": null, "type": null, "keywords": null, "isDefault": null, "icon": null}
            ]"#,
        )
        .unwrap();
        assert_eq!(cats.len(), 3);
        assert_eq!(cats[0].keywords, vec!["xăng"]);
        assert!(cats[1].keywords.is_empty());
        assert!(cats[1].is_default);
        assert_eq!(cats[2].id, "");
        assert_eq!(cats[2].name, "");
        assert_eq!(cats[2].kind, TransactionType::Expense);
        assert!(!cats[2].is_default);
        assert!(cats[2].icon.is_none());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let cat = Category::new("c1", "Khác", TransactionType::Expense, &[]).as_default();
        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(json["isDefault"], true);
        assert_eq!(json["type"], "expense");
        assert!(json.get("icon").is_none());
    }

    #[test]
    fn test_sort_puts_defaults_last() {
        let mut cats = vec![
            Category::new("1", "Khác", TransactionType::Expense, &[]).as_default(),
            Category::new("2", "Xăng xe", TransactionType::Expense, &["xăng"]),
            Category::new("3", "Ăn uống", TransactionType::Expense, &["ăn"]),
        ];
        sort_categories(&mut cats);
        let names: Vec<&str> = cats.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Xăng xe", "Ăn uống", "Khác"]);
    }

    #[test]
    fn test_fallback_category_by_type() {
        let cats = vec![
            Category::new("1", "Khác", TransactionType::Expense, &[]).as_default(),
            Category::new("2", "Lương", TransactionType::Income, &["lương"]),
            Category::new("3", "Thu nhập khác", TransactionType::Income, &[]).as_default(),
        ];
        assert_eq!(fallback_category(&cats, TransactionType::Income).unwrap().id, "3");
        assert_eq!(fallback_category(&cats, TransactionType::Expense).unwrap().id, "1");
        assert_eq!(categories_of_type(&cats, TransactionType::Income).len(), 2);
    }

    #[test]
    fn test_transaction_type_from_str() {
        assert_eq!("Income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("chi".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("loan".parse::<TransactionType>().is_err());
    }
}
