//! Вызов генерации на бэкенде

use crate::shared::api_utils::api_base;
use contracts::brief::Brief;
use contracts::post::{ErrorBody, GeneratedPost};
use gloo_net::http::Request;

/// Единственный сетевой вызов приложения: бриф -> статья.
/// Ошибка приходит как готовая строка для показа пользователю.
pub async fn generate_post(brief: &Brief) -> Result<GeneratedPost, String> {
    let url = format!("{}/api/generate", api_base());

    let response = Request::post(&url)
        .json(brief)
        .map_err(|e| format!("Не удалось подготовить запрос: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Сервер недоступен: {e}"))?;

    let text = response
        .text()
        .await
        .map_err(|e| format!("Не удалось прочитать ответ: {e}"))?;

    if !response.ok() {
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.display())
            .unwrap_or_else(|_| format!("Ошибка сервера: {}", response.status()));
        return Err(message);
    }

    serde_json::from_str::<GeneratedPost>(&text)
        .map_err(|e| format!("Не удалось разобрать ответ: {e}"))
}
