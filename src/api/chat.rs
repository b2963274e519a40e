//! AI chatbot endpoint

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::chat::{ChatRequest, ChatResponse},
};

/// Send a message to the helper chatbot. The exchange is appended to the
/// chat history log; an upstream failure surfaces as a server error.
#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Chat reply", body = ChatResponse),
        (status = 500, description = "Upstream chat service failure")
    )
)]
pub async fn chat(
    State(state): State<crate::AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let response = state.services.chat.send(&request).await?;
    Ok(Json(response))
}
