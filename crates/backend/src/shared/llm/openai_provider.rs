use super::types::{ChatMessage, ChatRole, LlmError, LlmProvider, LlmResponse, OutputSchema};
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
        ResponseFormatJsonSchema,
    },
    Client,
};
use async_trait::async_trait;

/// OpenAI-совместимый провайдер
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

/// 401 и 429 выделяются в свои варианты, остальное - общая ошибка API
fn classify_api_error(e: OpenAIError) -> LlmError {
    let text = e.to_string();
    if text.contains("401") || text.contains("authentication") {
        LlmError::AuthError(text)
    } else if text.contains("429") || text.contains("rate limit") {
        LlmError::RateLimitExceeded
    } else {
        LlmError::ApiError(text)
    }
}

impl OpenAiProvider {
    /// Создать с кастомным endpoint (для совместимых API)
    pub fn new_with_endpoint(
        api_endpoint: String,
        api_key: String,
        model: String,
        temperature: f64,
        max_tokens: i32,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_endpoint);

        Self {
            client: Client::with_config(config),
            model,
            temperature: temperature as f32,
            max_tokens: max_tokens as u32,
        }
    }

    /// Конвертировать наши сообщения в формат OpenAI
    fn convert_messages(
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        messages
            .into_iter()
            .map(|msg| {
                let converted: ChatCompletionRequestMessage = match msg.role {
                    ChatRole::System => ChatCompletionRequestSystemMessageArgs::default()
                        .content(msg.content)
                        .build()
                        .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                        .into(),
                    ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
                        .content(msg.content)
                        .build()
                        .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                        .into(),
                };
                Ok(converted)
            })
            .collect()
    }

    /// GPT-5 и o1/o3 модели принимают только дефолтные temperature
    /// и max_completion_tokens, для них параметры не передаются
    fn supports_advanced_params(model_id: &str) -> bool {
        let is_restricted = model_id.starts_with("gpt-5")
            || model_id.starts_with("o1-")
            || model_id.starts_with("o3-");

        !is_restricted
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn structured_completion(
        &self,
        messages: Vec<ChatMessage>,
        schema: &OutputSchema,
    ) -> Result<LlmResponse, LlmError> {
        let openai_messages = Self::convert_messages(messages)?;

        // Схема вывода уходит в запрос как response_format: модель
        // обязана вернуть ровно один соответствующий ей JSON объект
        let response_format = ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                description: None,
                name: schema.name.clone(),
                schema: Some(schema.schema.clone()),
                strict: Some(true),
            },
        };

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .messages(openai_messages)
            .response_format(response_format);

        if Self::supports_advanced_params(&self.model) {
            request_builder
                .temperature(self.temperature)
                .max_completion_tokens(self.max_tokens);
        }

        let request = request_builder
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(classify_api_error)?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| LlmError::ApiError("No response from API".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.clone().unwrap_or_default(),
            tokens_used: response.usage.map(|u| u.total_tokens as i32),
            model: response.model.clone(),
            finish_reason: choice.finish_reason.as_ref().map(|r| format!("{:?}", r)),
        })
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_models_skip_advanced_params() {
        assert!(OpenAiProvider::supports_advanced_params("gpt-4o"));
        assert!(OpenAiProvider::supports_advanced_params("gpt-3.5-turbo"));
        assert!(!OpenAiProvider::supports_advanced_params("gpt-5-mini"));
        assert!(!OpenAiProvider::supports_advanced_params("o1-preview"));
        assert!(!OpenAiProvider::supports_advanced_params("o3-mini"));
    }
}
