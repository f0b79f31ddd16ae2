use crate::dtos::CreateInquiryRequest;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const INQUIRY_COLLECTION: &str = "cleaninginquiry";

/// Stored form of a cleaning inquiry. `id` is assigned by MongoDB at
/// insert time and never changes afterwards; inquiries are never updated
/// or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub received_utc: DateTime<Utc>,
}

impl InquiryRecord {
    pub fn new(request: CreateInquiryRequest) -> Self {
        Self {
            id: None,
            name: request.name,
            email: request.email,
            phone: request.phone,
            service_type: request.service_type,
            message: request.message,
            received_utc: Utc::now(),
        }
    }
}
