//! JSON documents exchanged with the dashboard.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::config::{tmp_path, write_atomic};
use crate::core::{validate_input, SuggestionEngine};
use crate::domain::{ChartAccount, ImportedAccount, Mapping, Suggestion};
use crate::errors::MappingResult;

/// The three engine inputs as the dashboard exports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionInput {
    pub imported_accounts: Vec<ImportedAccount>,
    pub chart_accounts: Vec<ChartAccount>,
    #[serde(default)]
    pub existing_mappings: Vec<Mapping>,
}

impl SuggestionInput {
    pub fn from_json(data: &str) -> MappingResult<Self> {
        let input: SuggestionInput = serde_json::from_str(data)?;
        validate_input(&input.imported_accounts, &input.chart_accounts)?;
        Ok(input)
    }

    pub fn load(path: &Path) -> MappingResult<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn save(&self, path: &Path) -> MappingResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        let tmp = tmp_path(path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn suggest(&self, engine: &SuggestionEngine) -> Vec<Suggestion> {
        engine.generate(
            &self.imported_accounts,
            &self.chart_accounts,
            &self.existing_mappings,
        )
    }
}
