//! Turns reviewed suggestions into mapping records.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::domain::{Displayable, Mapping, MappingStatus, Suggestion};
use crate::errors::MappingError;

use super::ServiceResult;

/// Accept/reject helpers for the suggestion review list.
pub struct MappingService;

impl MappingService {
    /// Builds the mapping a user creates by accepting a suggestion.
    pub fn accept(
        suggestion: &Suggestion,
        mapped_by: &str,
        status: MappingStatus,
    ) -> ServiceResult<Mapping> {
        if status == MappingStatus::Pending {
            return Err(MappingError::InvalidInput(
                "accepted suggestions must be confirmed or suggested".into(),
            ));
        }
        if mapped_by.trim().is_empty() {
            return Err(MappingError::InvalidInput("mapped_by must not be empty".into()));
        }
        Ok(Mapping::new(
            suggestion.imported_account.id.clone(),
            suggestion.suggested_account.id.clone(),
            suggestion.imported_account.name.clone(),
            mapped_by,
        )
        .with_confidence(suggestion.confidence)
        .with_status(status))
    }

    /// Appends a confirmed mapping for each accepted suggestion id and returns
    /// the combined mapping set. The first accepted suggestion per imported
    /// account wins; accounts that already have a mapping are left alone.
    pub fn bulk_apply(
        existing: &[Mapping],
        suggestions: &[Suggestion],
        accepted_ids: &[String],
        mapped_by: &str,
    ) -> ServiceResult<Vec<Mapping>> {
        let known: HashSet<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
        if let Some(missing) = accepted_ids.iter().find(|id| !known.contains(id.as_str())) {
            return Err(MappingError::UnknownSuggestion(missing.clone()));
        }

        let accepted: HashSet<&str> = accepted_ids.iter().map(String::as_str).collect();
        let mut mapped: HashSet<String> = existing
            .iter()
            .map(|mapping| mapping.imported_account_id.clone())
            .collect();

        let mut result = existing.to_vec();
        let mut applied = 0usize;
        for suggestion in suggestions
            .iter()
            .filter(|suggestion| accepted.contains(suggestion.id.as_str()))
        {
            if !mapped.insert(suggestion.imported_account.id.clone()) {
                debug!(
                    suggestion = %suggestion.display_label(),
                    "imported account already mapped, skipping"
                );
                continue;
            }
            let mapping = Self::accept(suggestion, mapped_by, MappingStatus::Confirmed)?;
            debug!(mapping = %mapping.display_label(), "mapping created");
            result.push(mapping);
            applied += 1;
        }

        info!(applied, requested = accepted_ids.len(), "applied accepted suggestions");
        Ok(result)
    }

    /// Drops rejected suggestions, preserving order.
    pub fn reject(suggestions: &[Suggestion], rejected_ids: &[String]) -> Vec<Suggestion> {
        let rejected: HashSet<&str> = rejected_ids.iter().map(String::as_str).collect();
        suggestions
            .iter()
            .filter(|suggestion| !rejected.contains(suggestion.id.as_str()))
            .cloned()
            .collect()
    }

    /// Ids of suggestions at or above `threshold`, for "accept all above N".
    pub fn minimum_confidence(suggestions: &[Suggestion], threshold: u8) -> Vec<String> {
        suggestions
            .iter()
            .filter(|suggestion| suggestion.confidence >= threshold)
            .map(|suggestion| suggestion.id.clone())
            .collect()
    }
}
