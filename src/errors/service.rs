use thiserror::Error;

use super::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input rejected; surfaced directly, never retried
    #[error("Validation error: {0}")]
    Validation(String),

    /// Code namespace contention or exhaustion; operator action required
    #[error("Could not allocate a unique code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// Unknown or deleted code; a normal negative result
    #[error("No link found for code '{0}'")]
    NotFound(String),

    /// Backing storage failure propagated to the caller
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::StoreUnavailable(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Flatten field errors into a single string
        let message = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let reasons = errs
                    .iter()
                    .map(|e| e.message.clone().unwrap_or_else(|| e.code.clone()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}: {}", field, reasons)
            })
            .collect::<Vec<_>>()
            .join("; ");
        ServiceError::Validation(message)
    }
}
