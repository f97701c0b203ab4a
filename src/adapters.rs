pub mod credentials;
pub mod record_file;
pub mod sheets;
