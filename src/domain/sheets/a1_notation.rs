use std::fmt::Formatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl A1Notation {
    /// The whole sheet, e.g. `'Soul Vectors'`.
    ///
    /// # Examples
    /// ```
    /// use soul_vectors_sync::domain::sheets::a1_notation::A1Notation;
    /// assert_eq!(A1Notation::whole_sheet("Soul Vectors").as_ref(), "'Soul Vectors'");
    /// assert_eq!(A1Notation::whole_sheet("Ecodia's").as_ref(), "'Ecodia''s'");
    /// ```
    pub fn whole_sheet(sheet_name: &str) -> Self {
        A1Notation(quote_sheet_name(sheet_name))
    }

    /// A single cell of a sheet, e.g. `'Soul Vectors'!A1`.
    pub fn cell(sheet_name: &str, cell: &str) -> Self {
        A1Notation(format!("{}!{}", quote_sheet_name(sheet_name), cell))
    }
}

fn quote_sheet_name(sheet_name: &str) -> String {
    format!("'{}'", sheet_name.replace('\'', "''"))
}
