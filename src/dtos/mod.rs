pub mod inquiries;

pub use inquiries::{
    CreateInquiryRequest, CreateInquiryResponse, InquiryListParams, InquiryResponse,
};
