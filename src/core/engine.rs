use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{
    keywords, ChartAccount, Displayable, ImportedAccount, Mapping, Suggestion, SuggestionType,
};

use super::rules::{default_rules, KeywordRule};
use super::similarity::{similarity, similarity_percent};

const EXACT_REASON: &str = "Correspondência exata de nome ou código";

/// Tunable knobs of the suggestion engine. Defaults reproduce the
/// dashboard's scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub exact_confidence: u8,
    /// Candidates must score strictly above this to be suggested.
    pub similarity_threshold: f64,
    pub max_similar: usize,
    pub pattern_confidence_per_keyword: u8,
    pub pattern_confidence_cap: u8,
    pub rules: Vec<KeywordRule>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            exact_confidence: 95,
            similarity_threshold: 0.7,
            max_similar: 3,
            pattern_confidence_per_keyword: 25,
            pattern_confidence_cap: 85,
            rules: default_rules(),
        }
    }
}

/// Produces ranked mapping suggestions for imported accounts that have not
/// been mapped yet. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    settings: EngineSettings,
}

impl SuggestionEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Runs every matching strategy for each unmapped imported account, drops
    /// duplicate (imported, chart) pairs keeping the first one generated and
    /// orders the result by confidence, highest first.
    pub fn generate(
        &self,
        imported: &[ImportedAccount],
        chart: &[ChartAccount],
        existing: &[Mapping],
    ) -> Vec<Suggestion> {
        let mapped: HashSet<&str> = existing
            .iter()
            .map(|mapping| mapping.imported_account_id.as_str())
            .collect();

        let mut candidates = Vec::new();
        let mut unmapped = 0usize;
        for account in imported
            .iter()
            .filter(|account| !mapped.contains(account.id.as_str()))
        {
            unmapped += 1;
            let exact = self.exact_matches(account, chart);
            if exact.is_empty() {
                candidates.extend(self.similar_matches(account, chart));
            } else {
                candidates.extend(exact);
            }
            candidates.extend(self.pattern_matches(account, chart, existing));
            candidates.extend(self.rule_matches(account, chart));
        }

        let generated = candidates.len();
        let mut suggestions = dedup_pairs(candidates);
        // Stable: equal confidences keep generation order.
        suggestions.sort_by(|a, b| b.confidence.cmp(&a.confidence));

        debug!(
            imported = imported.len(),
            unmapped,
            generated,
            kept = suggestions.len(),
            "generated mapping suggestions"
        );
        suggestions
    }

    fn exact_matches(&self, account: &ImportedAccount, chart: &[ChartAccount]) -> Vec<Suggestion> {
        let name = account.name.to_lowercase();
        chart
            .iter()
            .filter(|candidate| {
                candidate.name.to_lowercase() == name || candidate.code == account.code
            })
            .map(|candidate| {
                trace!(
                    imported = %account.display_label(),
                    chart = %candidate.display_label(),
                    "exact match"
                );
                Suggestion::new(
                    account,
                    candidate,
                    self.settings.exact_confidence,
                    SuggestionType::Exact,
                    EXACT_REASON,
                )
            })
            .collect()
    }

    fn similar_matches(&self, account: &ImportedAccount, chart: &[ChartAccount]) -> Vec<Suggestion> {
        let mut scored: Vec<(f64, &ChartAccount)> = chart
            .iter()
            .map(|candidate| (similarity(&account.name, &candidate.name), candidate))
            .filter(|(score, _)| *score > self.settings.similarity_threshold)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(self.settings.max_similar);

        scored
            .into_iter()
            .map(|(score, candidate)| {
                let percent = similarity_percent(score);
                trace!(imported = %account.id, chart = %candidate.id, percent, "similar match");
                Suggestion::new(
                    account,
                    candidate,
                    percent,
                    SuggestionType::Similar,
                    format!("Similaridade de {percent}% no nome"),
                )
            })
            .collect()
    }

    fn pattern_matches(
        &self,
        account: &ImportedAccount,
        chart: &[ChartAccount],
        existing: &[Mapping],
    ) -> Vec<Suggestion> {
        let mut words = keywords(&account.name);
        let mut seen = HashSet::new();
        words.retain(|word| seen.insert(word.clone()));

        let mut suggestions = Vec::new();
        for mapping in existing {
            let history: HashSet<String> = keywords(&mapping.original_name).into_iter().collect();
            let common: Vec<&str> = words
                .iter()
                .filter(|word| history.contains(*word))
                .map(String::as_str)
                .collect();
            if common.is_empty() {
                continue;
            }
            let Some(target) = chart
                .iter()
                .find(|candidate| candidate.id == mapping.chart_account_id)
            else {
                trace!(chart = %mapping.chart_account_id, "mapping points outside chart");
                continue;
            };

            let confidence = (common.len() * usize::from(self.settings.pattern_confidence_per_keyword))
                .min(usize::from(self.settings.pattern_confidence_cap)) as u8;
            trace!(imported = %account.id, chart = %target.id, confidence, "pattern match");
            suggestions.push(Suggestion::new(
                account,
                target,
                confidence,
                SuggestionType::Pattern,
                format!("Padrão histórico: palavras-chave \"{}\"", common.join(", ")),
            ));
        }
        suggestions
    }

    fn rule_matches(&self, account: &ImportedAccount, chart: &[ChartAccount]) -> Vec<Suggestion> {
        let name = account.name.to_lowercase();
        let mut suggestions = Vec::new();
        for rule in self.settings.rules.iter().filter(|rule| rule.matches(&name)) {
            for candidate in chart
                .iter()
                .filter(|candidate| candidate.account_type == rule.target_type)
            {
                suggestions.push(Suggestion::new(
                    account,
                    candidate,
                    rule.confidence,
                    SuggestionType::Rule,
                    rule.reason.clone(),
                ));
            }
        }
        suggestions
    }
}

fn dedup_pairs(candidates: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    candidates
        .into_iter()
        .filter(|suggestion| {
            let (imported, chart) = suggestion.pair();
            seen.insert((imported.to_string(), chart.to_string()))
        })
        .collect()
}

/// Generates suggestions with the default engine settings.
pub fn generate_suggestions(
    imported: &[ImportedAccount],
    chart: &[ChartAccount],
    existing: &[Mapping],
) -> Vec<Suggestion> {
    SuggestionEngine::default().generate(imported, chart, existing)
}
