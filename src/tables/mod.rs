pub mod csv_store;
mod table_error;

pub use table_error::TableError;
