use crate::domain::{ChartAccount, Identifiable, ImportedAccount, NamedEntity};
use crate::errors::{MappingError, MappingResult};

/// Checks the records the engine relies on before a batch is generated.
pub fn validate_input(imported: &[ImportedAccount], chart: &[ChartAccount]) -> MappingResult<()> {
    require_identity("imported account", imported)?;
    require_identity("chart account", chart)?;
    for account in chart {
        if account.code.trim().is_empty() {
            return Err(MappingError::InvalidInput(format!(
                "chart account `{}` has an empty code",
                account.id
            )));
        }
    }
    Ok(())
}

/// Every record needs a non-blank id and name.
fn require_identity<T>(kind: &str, records: &[T]) -> MappingResult<()>
where
    T: Identifiable + NamedEntity,
{
    for (idx, record) in records.iter().enumerate() {
        if record.id().trim().is_empty() {
            return Err(MappingError::InvalidInput(format!(
                "{kind} #{idx} has an empty id"
            )));
        }
        if record.name().trim().is_empty() {
            return Err(MappingError::InvalidInput(format!(
                "{kind} `{}` has an empty name",
                record.id()
            )));
        }
    }
    Ok(())
}
