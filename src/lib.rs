pub mod format;
pub mod reader;
pub mod record;
pub mod sort;

pub use format::{write_table, SizeUnit};
pub use reader::{load_modules, read_records, ReadError, MODULES_PATH};
pub use record::ModuleRecord;
pub use sort::{sort_records, SortDirection, SortField, SortSelection};
