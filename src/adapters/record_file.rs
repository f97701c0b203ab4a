use std::path::Path;

use error_stack::{Report, ResultExt};
use tracing::instrument;

use crate::domain::records::record_set::{RecordLoadError, RecordSet};

/// Reads and validates the records file.
#[instrument]
pub fn load_records(path: &Path) -> error_stack::Result<RecordSet, RecordLoadError> {
    let json = std::fs::read_to_string(path).map_err(|error| {
        let unreadable = error.kind() != std::io::ErrorKind::NotFound;
        let report = Report::new(error)
            .change_context(RecordLoadError::NotFound)
            .attach_printable(format!("Cannot find {}", path.display()));
        if unreadable {
            report.attach_printable("File exists but could not be read")
        } else {
            report
        }
    })?;

    let records = RecordSet::from_json_str(&json)
        .attach_printable_lazy(|| format!("While loading {}", path.display()))?;

    tracing::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
