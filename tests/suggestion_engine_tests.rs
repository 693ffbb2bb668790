mod common;

use std::collections::HashSet;

use common::{sample_chart, sample_history, sample_imported};
use finup_mapping::{
    core::{levenshtein, similarity},
    domain::{AccountType, ChartAccount, ImportedAccount, Mapping, SuggestionType},
    generate_suggestions, init,
};

#[test]
fn batch_is_ranked_and_deduplicated() {
    init();
    let out = generate_suggestions(&sample_imported(), &sample_chart(), &sample_history());
    let summary: Vec<(&str, &str, SuggestionType, u8)> = out
        .iter()
        .map(|s| {
            (
                s.imported_account.id.as_str(),
                s.suggested_account.id.as_str(),
                s.suggestion_type,
                s.confidence,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("i-caixa", "c-caixa", SuggestionType::Exact, 95),
            ("i-banco", "c-bancos", SuggestionType::Similar, 95),
            ("i-fornec", "c-fornec", SuggestionType::Similar, 83),
            ("i-energia", "c-energia", SuggestionType::Pattern, 75),
            ("i-vendas", "c-receita", SuggestionType::Rule, 70),
            ("i-vendas", "c-servicos", SuggestionType::Rule, 70),
            ("i-energia", "c-aluguel", SuggestionType::Rule, 70),
        ]
    );
}

#[test]
fn output_is_deterministic() {
    let imported = sample_imported();
    let chart = sample_chart();
    let history = sample_history();
    let first = generate_suggestions(&imported, &chart, &history);
    let second = generate_suggestions(&imported, &chart, &history);
    assert_eq!(first, second);
}

#[test]
fn mapped_accounts_get_no_suggestions() {
    let mut history = sample_history();
    history.push(Mapping::new("i-caixa", "c-caixa", "CAIXA", "ana"));
    history.push(Mapping::new("i-vendas", "c-receita", "Receita de Vendas", "ana"));
    let out = generate_suggestions(&sample_imported(), &sample_chart(), &history);
    let mapped: HashSet<&str> = history.iter().map(|m| m.imported_account_id.as_str()).collect();
    assert!(!out.is_empty());
    assert!(out
        .iter()
        .all(|s| !mapped.contains(s.imported_account.id.as_str())));
}

#[test]
fn pairs_are_unique_and_confidence_never_increases() {
    let out = generate_suggestions(&sample_imported(), &sample_chart(), &sample_history());
    let mut pairs = HashSet::new();
    for suggestion in &out {
        assert!(pairs.insert(suggestion.pair()), "duplicate pair {:?}", suggestion.pair());
    }
    assert!(out.windows(2).all(|w| w[0].confidence >= w[1].confidence));
}

#[test]
fn exact_match_suppresses_similar_candidates() {
    let chart = vec![
        ChartAccount::new("c-1", "Caixa", "1.1.01", AccountType::Asset),
        ChartAccount::new("c-2", "Caixas", "1.1.09", AccountType::Asset),
    ];
    let imported = vec![ImportedAccount::new("i-1", "caixa", "")];
    let out = generate_suggestions(&imported, &chart, &[]);
    assert!(out.iter().all(|s| s.suggestion_type != SuggestionType::Similar));
    assert_eq!(out.len(), 1);
}

#[test]
fn similar_runs_when_no_exact_match() {
    let chart = vec![ChartAccount::new("c-2", "Caixas", "1.1.09", AccountType::Asset)];
    let imported = vec![ImportedAccount::new("i-1", "caixa", "")];
    let out = generate_suggestions(&imported, &chart, &[]);
    assert_eq!(out[0].suggestion_type, SuggestionType::Similar);
    assert_eq!(out[0].confidence, 83);
}

#[test]
fn levenshtein_reference_values() {
    assert_eq!(levenshtein("", ""), 0);
    assert_eq!(levenshtein("abc", "abc"), 0);
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(similarity("", ""), 1.0);
}

#[test]
fn revenue_keyword_yields_rule_suggestion() {
    let chart = vec![ChartAccount::new("c-1", "Receita Bruta", "3.1", AccountType::Revenue)];
    let imported = vec![ImportedAccount::new("i-1", "Receita de Vendas", "R01")];
    let out = generate_suggestions(&imported, &chart, &[]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].suggestion_type, SuggestionType::Rule);
    assert_eq!(out[0].confidence, 70);
    assert_eq!(out[0].reason, "Regra de negócio: conta de receita identificada");
}

#[test]
fn history_keywords_yield_pattern_suggestion() {
    let chart = vec![ChartAccount::new("x", "Energia", "4.2.05", AccountType::Other)];
    let history = vec![Mapping::new("old", "x", "Despesas com Energia", "ana")];
    let imported = vec![ImportedAccount::new("i-1", "Despesas com Energia Elétrica", "")];
    let out = generate_suggestions(&imported, &chart, &history);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].suggestion_type, SuggestionType::Pattern);
    assert_eq!(out[0].suggested_account.id, "x");
    assert_eq!(out[0].confidence, 75);
    assert_eq!(
        out[0].reason,
        "Padrão histórico: palavras-chave \"despesas, com, energia\""
    );
}

#[test]
fn empty_inputs_produce_nothing() {
    assert!(generate_suggestions(&[], &sample_chart(), &[]).is_empty());
    assert!(generate_suggestions(&sample_imported(), &[], &[]).is_empty());
}
