pub mod records;
pub mod sheets;
