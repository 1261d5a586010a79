use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::ChatTurn;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Prior turns, oldest first; owned by the chat transport
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Markdown-renderable reply
    pub reply: String,
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Chat widget metadata: title, description and example prompts
pub async fn interface_meta() -> Json<Value> {
    Json(json!({
        "title": "🎬 Film Öneri Chatbotu",
        "description": "İpucu ver: *korku 7 üstü*, *romantik komedi*, *dram 8+*.\n\
                        ‘başka / daha / farklı’ dersen daha önce önerdiklerimizi eleyip \
                        yeni sayfalardan getirir.",
        "examples": [
            "korku filmi 7 üstü",
            "romantik komedi öner",
            "dram 8 ve üzeri",
            "başka"
        ],
    }))
}

/// One chat turn. Engine-level failures are rendered into the reply text,
/// so this endpoint never answers with an error status for them.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = state.chat.respond(&request.message, &request.history).await;
    Json(ChatResponse { reply })
}
