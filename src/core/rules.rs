//! Keyword driven business rules that point imported accounts at a whole
//! class of chart accounts.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::AccountType;

/// Maps a set of keywords to the chart account type they imply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub target_type: AccountType,
    #[serde(default = "KeywordRule::default_confidence")]
    pub confidence: u8,
    pub reason: String,
}

impl KeywordRule {
    pub fn new(
        keywords: &[&str],
        target_type: AccountType,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            target_type,
            confidence: Self::default_confidence(),
            reason: reason.into(),
        }
    }

    /// True when the lowercased name contains any of the rule keywords.
    pub fn matches(&self, lowered_name: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && lowered_name.contains(keyword.as_str()))
    }

    pub fn default_confidence() -> u8 {
        70
    }
}

static DEFAULT_RULES: Lazy<Vec<KeywordRule>> = Lazy::new(|| {
    vec![
        KeywordRule::new(
            &["receita", "venda", "faturamento"],
            AccountType::Revenue,
            "Regra de negócio: conta de receita identificada",
        ),
        KeywordRule::new(
            &["despesa", "custo", "gasto"],
            AccountType::Expense,
            "Regra de negócio: conta de despesa identificada",
        ),
    ]
});

/// The built-in revenue and expense rules.
pub fn default_rules() -> Vec<KeywordRule> {
    DEFAULT_RULES.clone()
}
