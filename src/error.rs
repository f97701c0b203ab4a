use error_stack::Context;
use thiserror::Error;

use crate::adapters::credentials::CredentialError;
use crate::domain::records::record_set::RecordLoadError;
use crate::ports::sheet_values::SheetServiceError;

/// Top-level failure of one push run. Every variant is fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushError {
    #[error("Missing or invalid configuration")]
    Config,
    #[error("Input file not found")]
    NotFound,
    #[error("Input file is not valid JSON")]
    Parse,
    #[error("Input is empty or not a sequence of records")]
    Validation,
    #[error("Service account credential rejected")]
    Auth,
    #[error("Spreadsheet request failed")]
    Remote,
}

pub type PushResult<T> = error_stack::Result<T, PushError>;

impl From<CredentialError> for PushError {
    fn from(_: CredentialError) -> Self {
        PushError::Config
    }
}

impl From<RecordLoadError> for PushError {
    fn from(error: RecordLoadError) -> Self {
        match error {
            RecordLoadError::NotFound => PushError::NotFound,
            RecordLoadError::Parse => PushError::Parse,
            RecordLoadError::Validation => PushError::Validation,
        }
    }
}

impl From<SheetServiceError> for PushError {
    fn from(error: SheetServiceError) -> Self {
        match error {
            SheetServiceError::Auth => PushError::Auth,
            SheetServiceError::FailedToClearRange | SheetServiceError::FailedToWriteRange => {
                PushError::Remote
            }
        }
    }
}

/// Lifts a module-level report into a [`PushError`] one, keeping its frames.
pub trait IntoPushResult<T> {
    fn into_push_result(self) -> PushResult<T>;
}

impl<T, C> IntoPushResult<T> for error_stack::Result<T, C>
where
    C: Context + Copy,
    PushError: From<C>,
{
    fn into_push_result(self) -> PushResult<T> {
        self.map_err(|report| {
            let kind = PushError::from(*report.current_context());
            report.change_context(kind)
        })
    }
}
