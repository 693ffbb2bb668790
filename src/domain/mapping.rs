use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A confirmed link between an imported account and a chart account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    #[serde(default = "Mapping::generate_id")]
    pub id: String,
    pub imported_account_id: String,
    pub chart_account_id: String,
    /// Name of the imported account when the mapping was recorded; used for
    /// historical keyword matching.
    #[serde(default)]
    pub original_name: String,
    /// Confidence on the 0..=100 scale. Stored documents may use 0..=1.
    #[serde(default = "Mapping::full_confidence", deserialize_with = "deserialize_confidence")]
    pub confidence: u8,
    #[serde(default)]
    pub mapped_by: String,
    #[serde(default)]
    pub mapped_at: DateTime<Utc>,
    #[serde(default)]
    pub status: MappingStatus,
}

impl Mapping {
    /// Creates a confirmed mapping stamped with the current time.
    pub fn new(
        imported_account_id: impl Into<String>,
        chart_account_id: impl Into<String>,
        original_name: impl Into<String>,
        mapped_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Self::generate_id(),
            imported_account_id: imported_account_id.into(),
            chart_account_id: chart_account_id.into(),
            original_name: original_name.into(),
            confidence: 100,
            mapped_by: mapped_by.into(),
            mapped_at: Utc::now(),
            status: MappingStatus::Confirmed,
        }
    }

    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.confidence = confidence.min(100);
        self
    }

    pub fn with_status(mut self, status: MappingStatus) -> Self {
        self.status = status;
        self
    }

    fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    fn full_confidence() -> u8 {
        100
    }
}

/// Brings a stored confidence onto the 0..=100 scale. Values up to 1.0 are
/// read as fractions.
fn normalize_confidence(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    let percent = if raw <= 1.0 { raw * 100.0 } else { raw };
    percent.round().clamp(0.0, 100.0) as u8
}

fn deserialize_confidence<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?
        .map(normalize_confidence)
        .unwrap_or_else(Mapping::full_confidence))
}

impl Displayable for Mapping {
    fn display_label(&self) -> String {
        format!(
            "{} -> {} ({}%, {:?})",
            self.imported_account_id, self.chart_account_id, self.confidence, self.status
        )
    }
}

/// Lifecycle state of a mapping record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MappingStatus {
    #[default]
    Confirmed,
    Suggested,
    Pending,
}
