pub mod diagnostics;
pub mod inquiries;

pub use diagnostics::{connection_test, get_schema, welcome};
pub use inquiries::{create_inquiry, list_inquiries};
