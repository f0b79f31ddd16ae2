use crate::dtos::CreateInquiryRequest;
use crate::models::INQUIRY_COLLECTION;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "API de Empresa de Limpieza en Zúrich";

const ERROR_DETAIL_MAX_CHARS: usize = 50;
const COLLECTION_LIST_LIMIT: usize = 10;

pub async fn welcome() -> impl IntoResponse {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// Connectivity diagnostics. Always answers 200: failures are reported
/// inside the payload so the route stays usable while MongoDB is down.
pub async fn connection_test(State(state): State<AppState>) -> impl IntoResponse {
    let mut connection_status = "not connected";
    let mut collections: Vec<String> = Vec::new();

    let database = match state.db.health_check().await {
        Ok(()) => {
            connection_status = "connected";
            match state.db.list_collection_names().await {
                Ok(names) => {
                    collections = names.into_iter().take(COLLECTION_LIST_LIMIT).collect();
                    "connected and working".to_string()
                }
                Err(e) => format!("connected but error: {}", truncate_error(&e.to_string())),
            }
        }
        Err(e) => format!("error: {}", truncate_error(&e.to_string())),
    };

    Json(json!({
        "backend": "running",
        "database": database,
        "database_url": env_presence("DATABASE_URL"),
        "database_name": env_presence("DATABASE_NAME"),
        "connection_status": connection_status,
        "collections": collections,
    }))
}

/// Machine-readable description of the inquiry collection, derived from
/// the request schema. Never touches the database.
pub async fn get_schema() -> impl IntoResponse {
    let (_, schema) = <CreateInquiryRequest as ToSchema>::schema();
    Json(json!({
        "cleaninginquiry": {
            "name": INQUIRY_COLLECTION,
            "fields": schema,
        }
    }))
}

fn truncate_error(message: &str) -> String {
    message.chars().take(ERROR_DETAIL_MAX_CHARS).collect()
}

fn env_presence(key: &str) -> &'static str {
    if std::env::var(key).is_ok_and(|v| !v.is_empty()) {
        "set"
    } else {
        "not set"
    }
}
