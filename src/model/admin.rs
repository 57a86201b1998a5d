use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A moderation action applied to a set of ids in one request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BatchRequestDto {
    pub action: String,
    pub ids: Vec<i32>,
}

/// Outcome for a single item of a batch request. Items succeed or fail
/// independently; there is no rollback across the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BatchItemResultDto {
    pub id: i32,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BatchResponseDto {
    pub results: Vec<BatchItemResultDto>,
}
