use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Duplicate {kind} id '{id}' in seed data")]
    DuplicateId { kind: &'static str, id: Uuid },
}
