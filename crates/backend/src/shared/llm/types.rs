use async_trait::async_trait;
use thiserror::Error;

/// Ошибки LLM провайдера
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Роль сообщения. Генерация одношаговая: system задает роль
/// модели, user несет промпт. Истории с ответами ассистента
/// здесь не бывает.
#[derive(Debug, Clone, Copy)]
pub enum ChatRole {
    System,
    User,
}

/// Сообщение чата
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Декларация структурированного вывода: JSON Schema, которой
/// обязан соответствовать единственный объект в ответе модели
#[derive(Debug, Clone)]
pub struct OutputSchema {
    pub name: String,
    pub schema: serde_json::Value,
}

/// Полный (не потоковый) ответ модели
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub tokens_used: Option<i32>,
    pub model: String,
    pub finish_reason: Option<String>,
}

/// Трейт для LLM провайдеров
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Единственный вызов генерации: промпт плюс схема вывода,
    /// весь текст ответа целиком, без стриминга
    async fn structured_completion(
        &self,
        messages: Vec<ChatMessage>,
        schema: &OutputSchema,
    ) -> Result<LlmResponse, LlmError>;

    /// Получить название провайдера
    fn provider_name(&self) -> &str;
}
