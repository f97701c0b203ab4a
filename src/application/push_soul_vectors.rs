use std::path::PathBuf;

use tracing::instrument;

use crate::adapters::credentials::Credential;
use crate::adapters::record_file::load_records;
use crate::adapters::sheets::spreadsheet_manager::SpreadsheetManager;
use crate::config::app_config::AppConfig;
use crate::domain::sheets::target_range::TargetRange;
use crate::error::{IntoPushResult, PushResult};
use crate::ports::sheet_values::SheetValues;

/// Replaces the contents of the target sheet with the records file.
pub struct PushSoulVectors<S> {
    sheets: S,
    target: TargetRange,
    input_path: PathBuf,
    vector_field: String,
}

impl<S> std::fmt::Debug for PushSoulVectors<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushSoulVectors")
            .field("target", &self.target)
            .field("input_path", &self.input_path)
            .field("vector_field", &self.vector_field)
            .finish_non_exhaustive()
    }
}

impl<S: SheetValues> PushSoulVectors<S> {
    pub fn new(
        sheets: S,
        target: TargetRange,
        input_path: impl Into<PathBuf>,
        vector_field: impl Into<String>,
    ) -> Self {
        Self {
            sheets,
            target,
            input_path: input_path.into(),
            vector_field: vector_field.into(),
        }
    }

    /// Load, flatten, clear, write. Returns the number of data rows written.
    ///
    /// The clear is awaited before the write is issued. If the write fails
    /// after a successful clear the sheet is left empty.
    #[instrument(name = "push", skip(self), fields(sheet = self.target.sheet_name()))]
    pub async fn run(&self) -> PushResult<usize> {
        let records = load_records(&self.input_path).into_push_result()?;
        let table = records.to_table(&self.vector_field).into_push_result()?;

        self.sheets
            .clear_range(&self.target)
            .await
            .into_push_result()?;
        self.sheets
            .write_values(&self.target, &table.to_values())
            .await
            .into_push_result()?;

        tracing::info!(
            "✅ Updated \"{}\" with {} rows.",
            self.target.sheet_name(),
            table.row_count()
        );
        Ok(table.row_count())
    }
}

/// Full run against the real spreadsheet service, as configured.
#[instrument(skip(config))]
pub async fn push_from_config(config: &AppConfig) -> PushResult<usize> {
    let credential = Credential::from_env(&config.credentials.env_var).into_push_result()?;
    let sheets = SpreadsheetManager::new(&credential)
        .await
        .into_push_result()?;

    PushSoulVectors::new(
        sheets,
        config.target_range(),
        config.input_path(),
        &*config.input.vector_field,
    )
    .run()
    .await
}
