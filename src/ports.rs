pub mod sheet_values;
