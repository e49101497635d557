pub mod aggregate;
pub mod bulk;
pub mod error;

pub use aggregate::{BusinessDto, BusinessField, BusinessFlag, MachineDto, MachineField};
pub use bulk::{BulkImportRequest, ImportedRow};
pub use error::RecordError;
