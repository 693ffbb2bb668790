pub mod mapping_service;
pub mod recompute_service;
pub mod review_service;

pub use mapping_service::MappingService;
pub use recompute_service::{fingerprint, RecomputeService};
pub use review_service::{ReviewService, SortKey, SuggestionFilter, SuggestionStats};

use crate::errors::MappingError;

pub type ServiceResult<T> = Result<T, MappingError>;
