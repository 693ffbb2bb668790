use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::account::{ChartAccount, ImportedAccount};
use crate::domain::common::*;

/// A proposed, unconfirmed mapping between an imported and a chart account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub imported_account: ImportedAccount,
    pub suggested_account: ChartAccount,
    /// Integer confidence in 0..=100.
    pub confidence: u8,
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub reason: String,
}

impl Suggestion {
    pub fn new(
        imported: &ImportedAccount,
        chart: &ChartAccount,
        confidence: u8,
        suggestion_type: SuggestionType,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("{}:{}:{}", imported.id, chart.id, suggestion_type),
            imported_account: imported.clone(),
            suggested_account: chart.clone(),
            confidence: confidence.min(100),
            suggestion_type,
            reason: reason.into(),
        }
    }

    /// The (imported, chart) pair used for deduplication.
    pub fn pair(&self) -> (&str, &str) {
        (&self.imported_account.id, &self.suggested_account.id)
    }

    pub fn bucket(&self) -> ConfidenceBucket {
        ConfidenceBucket::of(self.confidence)
    }
}

impl Displayable for Suggestion {
    fn display_label(&self) -> String {
        format!(
            "{} -> {} [{} {}%]",
            self.imported_account.name,
            self.suggested_account.name,
            self.suggestion_type,
            self.confidence
        )
    }
}

/// How a suggestion was derived, in generation priority order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Exact,
    Similar,
    Pattern,
    Rule,
}

impl SuggestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionType::Exact => "exact",
            SuggestionType::Similar => "similar",
            SuggestionType::Pattern => "pattern",
            SuggestionType::Rule => "rule",
        }
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence ranges used by the review list filters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBucket {
    High,
    Medium,
    Low,
}

impl ConfidenceBucket {
    pub fn of(confidence: u8) -> Self {
        match confidence {
            80..=u8::MAX => ConfidenceBucket::High,
            60..=79 => ConfidenceBucket::Medium,
            _ => ConfidenceBucket::Low,
        }
    }

    pub fn contains(&self, confidence: u8) -> bool {
        Self::of(confidence) == *self
    }
}

impl fmt::Display for ConfidenceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfidenceBucket::High => "high",
            ConfidenceBucket::Medium => "medium",
            ConfidenceBucket::Low => "low",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountType;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(ConfidenceBucket::of(100), ConfidenceBucket::High);
        assert_eq!(ConfidenceBucket::of(80), ConfidenceBucket::High);
        assert_eq!(ConfidenceBucket::of(79), ConfidenceBucket::Medium);
        assert_eq!(ConfidenceBucket::of(60), ConfidenceBucket::Medium);
        assert_eq!(ConfidenceBucket::of(59), ConfidenceBucket::Low);
        assert_eq!(ConfidenceBucket::of(0), ConfidenceBucket::Low);
    }

    #[test]
    fn suggestion_id_is_derived_from_pair_and_type() {
        let imported = ImportedAccount::new("imp-7", "Caixa", "1.1");
        let chart = ChartAccount::new("c-3", "Caixa Geral", "1.1.01", AccountType::Asset);
        let suggestion = Suggestion::new(&imported, &chart, 95, SuggestionType::Exact, "x");
        assert_eq!(suggestion.id, "imp-7:c-3:exact");
        assert_eq!(suggestion.pair(), ("imp-7", "c-3"));
    }

    #[test]
    fn serializes_type_field_in_lowercase() {
        let imported = ImportedAccount::new("i", "Caixa", "");
        let chart = ChartAccount::new("c", "Caixa", "1", AccountType::Asset);
        let suggestion = Suggestion::new(&imported, &chart, 70, SuggestionType::Rule, "r");
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["type"], "rule");
        assert_eq!(json["suggestedAccount"]["type"], "asset");
    }
}
