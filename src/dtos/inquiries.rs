use crate::models::InquiryRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Inquiry submission payload. The derived schema doubles as the
/// machine-readable description served by the /schema route.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInquiryRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ana Keller")]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ana.keller@example.com")]
    pub email: String,

    #[schema(example = "+41 44 123 45 67")]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "Service type is required"))]
    #[schema(example = "limpieza de oficina")]
    pub service_type: String,

    #[schema(example = "Necesitamos limpieza semanal para una oficina de 200 m2.")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateInquiryResponse {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Solicitud recibida. ¡Gracias!")]
    pub message: String,
}

/// Public form of a stored inquiry: the MongoDB `_id` becomes a plain
/// `id` string and the timestamp is rendered RFC 3339.
#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub received_utc: String,
}

impl From<InquiryRecord> for InquiryResponse {
    fn from(record: InquiryRecord) -> Self {
        Self {
            id: record.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: record.name,
            email: record.email,
            phone: record.phone,
            service_type: record.service_type,
            message: record.message,
            received_utc: record.received_utc.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InquiryListParams {
    pub limit: Option<i64>,
}
