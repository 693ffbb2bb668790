pub mod engine;
pub mod rules;
pub mod services;
pub mod similarity;
pub mod validation;

pub use engine::{generate_suggestions, EngineSettings, SuggestionEngine};
pub use rules::{default_rules, KeywordRule};
pub use similarity::{levenshtein, similarity};
pub use validation::validate_input;
