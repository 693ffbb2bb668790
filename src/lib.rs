#![doc(test(attr(deny(warnings))))]

//! Finup Mapping suggests chart-of-accounts targets for imported accounts
//! using exact, fuzzy, historical and rule-based matching.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod io;
pub mod utils;

pub use crate::core::{generate_suggestions, SuggestionEngine};
pub use errors::{MappingError, MappingResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finup Mapping tracing initialized.");
    });
}
