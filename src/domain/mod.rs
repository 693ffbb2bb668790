pub mod account;
pub mod common;
pub mod mapping;
pub mod suggestion;

pub use account::{AccountType, ChartAccount, ImportedAccount};
pub use common::{keywords, Displayable, Identifiable, NamedEntity};
pub use mapping::{Mapping, MappingStatus};
pub use suggestion::{ConfidenceBucket, Suggestion, SuggestionType};
