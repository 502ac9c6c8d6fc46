#[derive(serde::Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

#[derive(serde::Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(serde::Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(serde::Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(serde::Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

#[derive(serde::Deserialize)]
pub struct ApiError {
    pub message: String,
}
