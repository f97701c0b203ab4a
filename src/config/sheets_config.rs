#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SpreadsheetConfig {
    pub spreadsheet_id: Box<str>,
    pub sheet_name: Box<str>,
}

impl Default for SpreadsheetConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: "1gUJhD58t0_RxLVmzi4f3cLCCoC3ggXwR31F0hQlhBhU".into(),
            sheet_name: "Soul Vectors".into(),
        }
    }
}
