//! API DTOs shared by controllers

pub mod paginated_response;
pub mod shift_dto;
pub mod system_dto;

use serde::Serialize;

/// Envelope wrapped around every JSON payload the API returns.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub is_successful: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            is_successful: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_successful: false,
            data: None,
            message: Some(message.into()),
        }
    }
}
