pub mod details;
pub mod import;
pub mod list;
pub mod page;

pub use details::BusinessDetails;
pub use import::BusinessImport;
pub use list::BusinessList;
pub use page::BusinessNewPage;
