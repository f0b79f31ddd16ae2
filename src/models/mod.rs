pub mod inquiry;

pub use inquiry::{InquiryRecord, INQUIRY_COLLECTION};
