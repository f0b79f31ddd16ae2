pub mod database;
pub mod metrics;

pub use database::InquiryDb;
pub use metrics::{get_metrics, init_metrics};
