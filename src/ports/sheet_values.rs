use thiserror::Error;

use crate::domain::sheets::target_range::TargetRange;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetServiceError {
    #[error("Service account authentication failed")]
    Auth,
    #[error("Failed to clear range")]
    FailedToClearRange,
    #[error("Failed to write range")]
    FailedToWriteRange,
}

/// The two spreadsheet-values calls a push needs.
#[async_trait::async_trait]
pub trait SheetValues: Send + Sync {
    /// Removes every value in the target sheet.
    async fn clear_range(
        &self,
        target: &TargetRange,
    ) -> error_stack::Result<(), SheetServiceError>;

    /// Writes `rows` starting at the top-left cell of the target sheet,
    /// taking every cell literally.
    async fn write_values(
        &self,
        target: &TargetRange,
        rows: &[Vec<String>],
    ) -> error_stack::Result<(), SheetServiceError>;
}
