use crate::domain::ids::{ActorId, ItemId};
use crate::domain::item::ItemKind;
use thiserror::Error;

/// Coarse classification of a [`HoldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    PolicyViolation,
    OwnershipMismatch,
    Validation,
}

/// A request the registry refused.
///
/// Every variant is an ordinary outcome for the caller to report; none of
/// them leave the store partially updated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoldError {
    #[error("actor {0} not found")]
    ActorNotFound(ActorId),
    #[error("item {0} not found")]
    EntityNotFound(ItemId),
    #[error("item {item} is already held by actor {holder}")]
    EntityUnavailable { item: ItemId, holder: ActorId },
    #[error("actor {actor} already holds {limit} item(s), the most their policy allows")]
    LimitExceeded { actor: ActorId, limit: usize },
    #[error("requested {requested} day(s), policy allows at most {max}")]
    TermExceeded { requested: u32, max: u32 },
    #[error("item {0} is not held")]
    NotHeld(ItemId),
    #[error("item {item} is held by actor {holder}, not actor {actor}")]
    WrongHolder {
        item: ItemId,
        actor: ActorId,
        holder: ActorId,
    },
    #[error("no available item of kind {0}")]
    NoneAvailable(ItemKind),
    #[error("validation error: {0}")]
    Validation(String),
}

impl HoldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HoldError::ActorNotFound(_) | HoldError::EntityNotFound(_) => ErrorKind::NotFound,
            HoldError::EntityUnavailable { .. }
            | HoldError::NotHeld(_)
            | HoldError::NoneAvailable(_) => ErrorKind::InvalidState,
            HoldError::LimitExceeded { .. } | HoldError::TermExceeded { .. } => {
                ErrorKind::PolicyViolation
            }
            HoldError::WrongHolder { .. } => ErrorKind::OwnershipMismatch,
            HoldError::Validation(_) => ErrorKind::Validation,
        }
    }
}

/// Failures at the edge of the process: reading scripts, writing reports.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Request error: {0}")]
    RequestError(#[from] HoldError),
}

pub type Result<T, E = HoldError> = std::result::Result<T, E>;
