/// One data row, positionally aligned with the table headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow(Vec<String>);

impl SheetRow {
    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

impl AsRef<[String]> for SheetRow {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

/// Header row plus data rows. Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    headers: Vec<String>,
    rows: Vec<SheetRow>,
}

impl SheetTable {
    /// Builds one row per item by asking `cell` for each header in order.
    /// Stops at the first cell that fails.
    pub fn project<T, I, F, E>(headers: Vec<String>, items: I, mut cell: F) -> Result<Self, E>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T, &str) -> Result<String, E>,
    {
        let rows = items
            .into_iter()
            .map(|item| {
                headers
                    .iter()
                    .map(|header| cell(&item, header))
                    .collect::<Result<Vec<_>, E>>()
                    .map(SheetRow)
            })
            .collect::<Result<Vec<_>, E>>()?;

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    /// Data rows only; the header row is not counted.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header row followed by the data rows, ready to be written from A1.
    pub fn to_values(&self) -> Vec<Vec<String>> {
        std::iter::once(self.headers.clone())
            .chain(self.rows.iter().map(|row| row.0.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    #[test]
    fn test_project_aligns_rows_with_headers() {
        let headers = vec!["id".to_string(), "n".to_string()];
        let table = SheetTable::project(headers, [1, 2, 3], |item, header| {
            Ok::<_, Infallible>(match header {
                "id" => format!("row-{item}"),
                _ => (item * 10).to_string(),
            })
        })
        .unwrap();

        assert_eq!(table.row_count(), 3);
        assert!(table
            .rows()
            .iter()
            .all(|row| row.cells().len() == table.headers().len()));
        assert_eq!(table.rows()[1].cells(), ["row-2", "20"]);
    }

    #[test]
    fn test_to_values_puts_headers_first() {
        let table = SheetTable::project(vec!["a".to_string()], ["x", "y"], |item, _| {
            Ok::<_, Infallible>(item.to_string())
        })
        .unwrap();
        assert_eq!(
            table.to_values(),
            vec![
                vec!["a".to_string()],
                vec!["x".to_string()],
                vec!["y".to_string()]
            ]
        );
    }

    #[test]
    fn test_project_stops_at_first_failing_cell() {
        let mut seen = Vec::new();
        let result = SheetTable::project(vec!["v".to_string()], [1, 2, 3], |item, _| {
            seen.push(*item);
            if *item == 2 {
                Err("bad cell")
            } else {
                Ok(item.to_string())
            }
        });
        assert_eq!(result, Err("bad cell"));
        assert_eq!(seen, [1, 2]);
    }
}
