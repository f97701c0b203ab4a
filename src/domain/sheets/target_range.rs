use super::a1_notation::A1Notation;

/// Destination of a push: one sheet of one spreadsheet, fixed for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRange {
    spreadsheet_id: String,
    sheet_name: String,
}

impl TargetRange {
    pub fn new(spreadsheet_id: impl Into<String>, sheet_name: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            sheet_name: sheet_name.into(),
        }
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn whole_sheet(&self) -> A1Notation {
        A1Notation::whole_sheet(&self.sheet_name)
    }

    pub fn top_left(&self) -> A1Notation {
        A1Notation::cell(&self.sheet_name, "A1")
    }
}
