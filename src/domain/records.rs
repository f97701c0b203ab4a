pub mod cell_text;
pub mod field_value;
pub mod record_set;
