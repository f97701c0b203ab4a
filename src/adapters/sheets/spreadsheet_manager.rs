use error_stack::{Report, ResultExt};
use google_sheets4::{
    api::{ClearValuesRequest, Scope, ValueRange},
    Sheets,
};
use std::fmt::Debug;
use tracing::instrument;

use crate::adapters::credentials::Credential;
use crate::domain::sheets::target_range::TargetRange;
use crate::ports::sheet_values::{SheetServiceError, SheetValues};

use super::{
    auth::{self},
    http_client::{self, HttpsConnector},
    value_range_factory::ValueRangeFactory,
};

/// Authorized Sheets client, bound to one service account and the
/// read/write spreadsheets scope.
pub struct SpreadsheetManager {
    client_email: Option<String>,
    hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SpreadsheetManager {{ client_email: {:?} }}",
            self.client_email
        )
    }
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(credential: &Credential) -> error_stack::Result<Self, SheetServiceError> {
        let client = http_client::http_client();
        let auth = auth::auth(credential, client.clone()).await?;
        let hub: Sheets<HttpsConnector> = Sheets::new(client, auth);

        Ok(SpreadsheetManager {
            client_email: credential.client_email().map(str::to_owned),
            hub,
        })
    }
}

/// Token failures surface on the first call; everything else is the call itself.
fn call_error(
    error: google_sheets4::Error,
    context: SheetServiceError,
) -> Report<SheetServiceError> {
    let context = match &error {
        google_sheets4::Error::MissingToken(_) => SheetServiceError::Auth,
        _ => context,
    };
    Report::new(error).change_context(context)
}

#[async_trait::async_trait]
impl SheetValues for SpreadsheetManager {
    #[instrument(skip(self))]
    async fn clear_range(
        &self,
        target: &TargetRange,
    ) -> error_stack::Result<(), SheetServiceError> {
        let range = target.whole_sheet();
        let (_, response) = self
            .hub
            .spreadsheets()
            .values_clear(
                ClearValuesRequest::default(),
                target.spreadsheet_id(),
                range.as_ref(),
            )
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .map_err(|error| call_error(error, SheetServiceError::FailedToClearRange))
            .attach_printable_lazy(|| format!("Failed to clear range {}", range))?;

        tracing::debug!("Cleared {:?}", response.cleared_range);
        Ok(())
    }

    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    async fn write_values(
        &self,
        target: &TargetRange,
        rows: &[Vec<String>],
    ) -> error_stack::Result<(), SheetServiceError> {
        let range = target.top_left();
        let (_, response) = self
            .hub
            .spreadsheets()
            .values_update(
                ValueRange::from_rows(rows),
                target.spreadsheet_id(),
                range.as_ref(),
            )
            .value_input_option("RAW")
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .map_err(|error| call_error(error, SheetServiceError::FailedToWriteRange))
            .attach_printable_lazy(|| format!("Failed to write to range {} ", range))?;

        tracing::debug!(
            "Wrote {:?} rows / {:?} cells to {:?}",
            response.updated_rows,
            response.updated_cells,
            response.updated_range
        );
        Ok(())
    }
}
