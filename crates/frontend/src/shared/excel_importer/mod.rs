pub mod parser;
pub mod types;
pub mod widget;

pub use parser::{parse_workbook, BinarySource, ExcelError};
pub use types::{ExcelData, ExcelMetadata};
pub use widget::ExcelImporter;
