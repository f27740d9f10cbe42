pub mod error;
pub mod index;
pub mod table;

pub use error::IngestError;
pub use index::{TableIndex, build_index};
pub use table::{TABLE_EXT, read_label_table, read_rows, read_table};
