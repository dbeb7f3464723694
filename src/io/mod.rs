pub mod csv_write;
pub mod encoding;
pub mod json_read;
