mod summary;
mod table;

pub use summary::write_summary;
pub use table::{write_table, TableOptions};
