//! Filtering, ordering and counting helpers backing the suggestion review list.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{ConfidenceBucket, Suggestion, SuggestionType};

/// Narrows a suggestion list; `None` fields accept everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionFilter {
    pub bucket: Option<ConfidenceBucket>,
    pub suggestion_type: Option<SuggestionType>,
}

impl SuggestionFilter {
    pub fn bucket(mut self, bucket: ConfidenceBucket) -> Self {
        self.bucket = Some(bucket);
        self
    }

    pub fn suggestion_type(mut self, suggestion_type: SuggestionType) -> Self {
        self.suggestion_type = Some(suggestion_type);
        self
    }

    pub fn accepts(&self, suggestion: &Suggestion) -> bool {
        self.bucket
            .map_or(true, |bucket| bucket.contains(suggestion.confidence))
            && self
                .suggestion_type
                .map_or(true, |kind| kind == suggestion.suggestion_type)
    }
}

/// Orderings offered by the review list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Highest confidence first.
    #[default]
    Confidence,
    /// Lexicographic on the type name.
    Type,
    /// Lexicographic on the imported account name.
    ImportedName,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "confidence" => Some(SortKey::Confidence),
            "type" => Some(SortKey::Type),
            "name" | "imported" | "imported_name" => Some(SortKey::ImportedName),
            _ => None,
        }
    }
}

/// Aggregate counts shown next to the review list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionStats {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub exact: usize,
    pub similar: usize,
    pub pattern: usize,
    pub rule: usize,
    pub covered_accounts: usize,
}

pub struct ReviewService;

impl ReviewService {
    pub fn filter<'a>(suggestions: &'a [Suggestion], filter: &SuggestionFilter) -> Vec<&'a Suggestion> {
        suggestions
            .iter()
            .filter(|suggestion| filter.accepts(suggestion))
            .collect()
    }

    /// Stable sort, so equal keys keep their engine order.
    pub fn sort(items: &mut [&Suggestion], key: SortKey) {
        match key {
            SortKey::Confidence => items.sort_by(|a, b| b.confidence.cmp(&a.confidence)),
            SortKey::Type => {
                items.sort_by(|a, b| a.suggestion_type.as_str().cmp(b.suggestion_type.as_str()))
            }
            SortKey::ImportedName => {
                items.sort_by(|a, b| a.imported_account.name.cmp(&b.imported_account.name))
            }
        }
    }

    /// Filters and then orders in one pass, as the review list renders it.
    pub fn view<'a>(
        suggestions: &'a [Suggestion],
        filter: &SuggestionFilter,
        key: SortKey,
    ) -> Vec<&'a Suggestion> {
        let mut items = Self::filter(suggestions, filter);
        Self::sort(&mut items, key);
        items
    }

    pub fn stats(suggestions: &[Suggestion]) -> SuggestionStats {
        let mut stats = SuggestionStats {
            total: suggestions.len(),
            ..SuggestionStats::default()
        };
        let mut covered = HashSet::new();
        for suggestion in suggestions {
            match suggestion.bucket() {
                ConfidenceBucket::High => stats.high += 1,
                ConfidenceBucket::Medium => stats.medium += 1,
                ConfidenceBucket::Low => stats.low += 1,
            }
            match suggestion.suggestion_type {
                SuggestionType::Exact => stats.exact += 1,
                SuggestionType::Similar => stats.similar += 1,
                SuggestionType::Pattern => stats.pattern += 1,
                SuggestionType::Rule => stats.rule += 1,
            }
            covered.insert(suggestion.imported_account.id.as_str());
        }
        stats.covered_accounts = covered.len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountType, ChartAccount, ImportedAccount};

    fn suggestion(imported: &str, confidence: u8, kind: SuggestionType) -> Suggestion {
        let account = ImportedAccount::new(imported, imported, "");
        let chart = ChartAccount::new(format!("c-{imported}"), "Alvo", "1", AccountType::Other);
        Suggestion::new(&account, &chart, confidence, kind, "test")
    }

    fn sample() -> Vec<Suggestion> {
        vec![
            suggestion("Caixa", 95, SuggestionType::Exact),
            suggestion("Bancos", 83, SuggestionType::Similar),
            suggestion("Aluguel", 75, SuggestionType::Pattern),
            suggestion("Vendas", 70, SuggestionType::Rule),
            suggestion("Diversos", 50, SuggestionType::Pattern),
        ]
    }

    #[test]
    fn filters_by_bucket() {
        let items = sample();
        let high = ReviewService::filter(&items, &SuggestionFilter::default().bucket(ConfidenceBucket::High));
        assert_eq!(high.len(), 2);
        let medium =
            ReviewService::filter(&items, &SuggestionFilter::default().bucket(ConfidenceBucket::Medium));
        assert_eq!(medium.len(), 2);
        let low = ReviewService::filter(&items, &SuggestionFilter::default().bucket(ConfidenceBucket::Low));
        assert_eq!(low[0].imported_account.name, "Diversos");
    }

    #[test]
    fn combines_bucket_and_type() {
        let items = sample();
        let filter = SuggestionFilter::default()
            .bucket(ConfidenceBucket::Medium)
            .suggestion_type(SuggestionType::Pattern);
        let hits = ReviewService::filter(&items, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].imported_account.name, "Aluguel");
    }

    #[test]
    fn sorts_by_type_then_keeps_order() {
        let items = sample();
        let view = ReviewService::view(&items, &SuggestionFilter::default(), SortKey::Type);
        let names: Vec<_> = view.iter().map(|s| s.imported_account.name.as_str()).collect();
        assert_eq!(names, vec!["Caixa", "Aluguel", "Diversos", "Vendas", "Bancos"]);
    }

    #[test]
    fn sorts_by_imported_name() {
        let items = sample();
        let view = ReviewService::view(&items, &SuggestionFilter::default(), SortKey::ImportedName);
        assert_eq!(view[0].imported_account.name, "Aluguel");
        assert_eq!(view[4].imported_account.name, "Vendas");
    }

    #[test]
    fn stats_count_buckets_types_and_accounts() {
        let mut items = sample();
        items.push(suggestion("Caixa", 70, SuggestionType::Rule));
        let stats = ReviewService::stats(&items);
        assert_eq!(stats.total, 6);
        assert_eq!((stats.high, stats.medium, stats.low), (2, 3, 1));
        assert_eq!(stats.pattern, 2);
        assert_eq!(stats.rule, 2);
        assert_eq!(stats.covered_accounts, 5);
    }

    #[test]
    fn parses_sort_keys() {
        assert_eq!(SortKey::parse("Confidence"), Some(SortKey::Confidence));
        assert_eq!(SortKey::parse("name"), Some(SortKey::ImportedName));
        assert_eq!(SortKey::parse("date"), None);
    }
}
