use thiserror::Error;

use crate::domain::types::EntityValidationError;

/// Error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The input violated a category invariant. Displays the invariant message.
    #[error(transparent)]
    Validation(#[from] EntityValidationError),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
