pub mod a1_notation;
pub mod sheet_table;
pub mod target_range;
