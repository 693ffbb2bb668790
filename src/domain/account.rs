use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// An account label produced by an external import, not yet linked to the
/// chart of accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ImportedAccount {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl ImportedAccount {
    pub fn new(id: impl Into<String>, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            account_type: None,
        }
    }
}

impl Identifiable for ImportedAccount {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for ImportedAccount {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for ImportedAccount {
    fn display_label(&self) -> String {
        if self.code.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.code, self.name)
        }
    }
}

/// An entry of the client's internal chart of accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ChartAccount {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default = "ChartAccount::default_level")]
    pub level: u32,
}

impl ChartAccount {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            account_type,
            level: Self::default_level(),
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    fn default_level() -> u32 {
        1
    }
}

impl Identifiable for ChartAccount {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for ChartAccount {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for ChartAccount {
    fn display_label(&self) -> String {
        format!("{} - {} ({})", self.code, self.name, self.account_type)
    }
}

/// Enumerates the chart-of-accounts classifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Revenue,
    Expense,
    Asset,
    Liability,
    Other,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Revenue => "revenue",
            AccountType::Expense => "expense",
            AccountType::Asset => "asset",
            AccountType::Liability => "liability",
            AccountType::Other => "other",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
