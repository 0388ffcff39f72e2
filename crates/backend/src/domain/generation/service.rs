use super::{prompt, sanitize, schema};
use crate::shared::config;
use crate::shared::llm::openai_provider::OpenAiProvider;
use crate::shared::llm::types::{ChatMessage, LlmError, LlmProvider, OutputSchema};
use contracts::brief::Brief;
use contracts::post::{ArticleBody, BodyFormat, GeneratedPost};
use thiserror::Error;

/// Фиксированное сообщение пользователю при любом сбое генерации.
/// Причина логируется целиком, наружу уходит только как detail.
pub const GENERIC_FAILURE: &str = "Модель не смогла сгенерировать корректную статью. Проверьте вводные или повторите попытку позже.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid brief: {0}")]
    InvalidBrief(String),

    #[error("LLM API key is not configured")]
    MissingApiKey,

    #[error(transparent)]
    Provider(#[from] LlmError),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

/// Единственная операция генерации: бриф -> статья.
/// Один вызов модели, без ретраев, стриминга и отмены.
pub async fn generate(brief: &Brief) -> Result<GeneratedPost, GenerationError> {
    brief.validate().map_err(GenerationError::InvalidBrief)?;
    let brief = brief.trimmed();

    let cfg = config::get();
    if cfg.llm.api_key.trim().is_empty() {
        return Err(GenerationError::MissingApiKey);
    }

    let format = cfg.post.body_format;
    let branding = cfg.post.branding.as_deref();

    let output_schema = OutputSchema {
        name: schema::SCHEMA_NAME.to_string(),
        schema: schema::response_schema(format, branding),
    };
    let messages = vec![
        ChatMessage::system(prompt::SYSTEM_ROLE),
        ChatMessage::user(prompt::build_prompt(&brief, format, branding)),
    ];

    let provider = OpenAiProvider::new_with_endpoint(
        cfg.llm.api_endpoint.clone(),
        cfg.llm.api_key.clone(),
        cfg.llm.model_name.clone(),
        cfg.llm.temperature,
        cfg.llm.max_tokens,
    );

    tracing::debug!(
        provider = provider.provider_name(),
        model = %cfg.llm.model_name,
        format = format.as_str(),
        "Dispatching generation request"
    );

    let response = provider.structured_completion(messages, &output_schema).await?;
    tracing::info!(
        tokens = response.tokens_used,
        model = %response.model,
        finish = ?response.finish_reason,
        "LLM reply received"
    );

    let mut post = decode_post(&response.content, format)?;

    if let ArticleBody::Html(html) = &post.body {
        post.body = ArticleBody::Html(sanitize::clean_article_html(html));
    }

    Ok(post)
}

/// Снимает случайную обертку ```-fence, если модель все же
/// завернула JSON в markdown-блок
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Валидирующий декодер ответа: сначала разбор в Value, затем
/// проверка каждого обязательного поля. Отсутствие или нестроковый
/// тип дают MalformedResponse с именем поля, а не undefined ниже
/// по течению.
fn decode_post(raw: &str, format: BodyFormat) -> Result<GeneratedPost, GenerationError> {
    let text = strip_code_fence(raw);

    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| GenerationError::MalformedResponse(format!("reply is not valid JSON: {e}")))?;

    let obj = value
        .as_object()
        .ok_or_else(|| GenerationError::MalformedResponse("reply is not a JSON object".into()))?;

    let string_field = |key: &str| -> Result<String, GenerationError> {
        obj.get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                GenerationError::MalformedResponse(format!("missing or non-string field `{key}`"))
            })
    };

    let body_source = string_field(format.wire_key())?;
    let body = match format {
        BodyFormat::Markdown => ArticleBody::Markdown(body_source),
        BodyFormat::Html => ArticleBody::Html(body_source),
    };

    let powered_by = match obj.get("poweredBy") {
        Some(v) => Some(v.as_str().map(str::to_string).ok_or_else(|| {
            GenerationError::MalformedResponse("non-string field `poweredBy`".into())
        })?),
        None => None,
    };

    Ok(GeneratedPost {
        title: string_field("title")?,
        slug: string_field("slug")?,
        meta_description: string_field("metaDescription")?,
        author: string_field("author")?,
        powered_by,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::brief::BriefStyle;

    const REPLY: &str = r##"{"title":"Five Budgeting Tips for Young Professionals","slug":"five-budgeting-tips-for-young-professionals","metaDescription":"Simple budgeting tips for young professionals.","author":"Jane Doe","articleBody":"# Five Budgeting Tips\n\nSaving money starts small."}"##;

    fn valid_brief() -> Brief {
        Brief {
            topic: "Five Budgeting Tips".into(),
            keywords: "budgeting, saving money".into(),
            audience: "young professionals".into(),
            author: "Jane Doe".into(),
            style: BriefStyle::default(),
        }
    }

    #[tokio::test]
    async fn test_invalid_brief_fails_before_any_network() {
        let mut brief = valid_brief();
        brief.topic = "   ".into();
        let err = generate(&brief).await.unwrap_err();
        assert!(matches!(err, GenerationError::InvalidBrief(_)));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_terminal() {
        // встроенный дефолтный конфиг идет без ключа
        let err = generate(&valid_brief()).await.unwrap_err();
        assert!(matches!(err, GenerationError::MissingApiKey));
    }

    #[test]
    fn test_decode_valid_reply_unmodified() {
        let post = decode_post(REPLY, BodyFormat::Markdown).unwrap();
        assert_eq!(post.title, "Five Budgeting Tips for Young Professionals");
        assert_eq!(post.slug, "five-budgeting-tips-for-young-professionals");
        assert_eq!(post.author, "Jane Doe");
        assert!(post.powered_by.is_none());
        assert_eq!(
            post.body,
            ArticleBody::Markdown("# Five Budgeting Tips\n\nSaving money starts small.".into())
        );
    }

    #[test]
    fn test_fenced_reply_equals_unfenced() {
        let fenced = format!("```json\n{REPLY}\n```");
        let a = decode_post(&fenced, BodyFormat::Markdown).unwrap();
        let b = decode_post(REPLY, BodyFormat::Markdown).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bare_fence_without_language_tag() {
        let fenced = format!("```\n{REPLY}\n```");
        assert!(decode_post(&fenced, BodyFormat::Markdown).is_ok());
    }

    #[test]
    fn test_non_json_reply_is_malformed() {
        let err = decode_post("Sorry, I cannot help with that.", BodyFormat::Markdown).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let reply = r#"{"title":"T","metaDescription":"M","author":"A","articleBody":"B"}"#;
        let err = decode_post(reply, BodyFormat::Markdown).unwrap_err();
        assert!(err.to_string().contains("`slug`"));
    }

    #[test]
    fn test_non_string_field_is_malformed() {
        let reply = r#"{"title":42,"slug":"s","metaDescription":"M","author":"A","articleBody":"B"}"#;
        let err = decode_post(reply, BodyFormat::Markdown).unwrap_err();
        assert!(err.to_string().contains("`title`"));
    }

    #[test]
    fn test_html_format_reads_html_key() {
        let reply = r#"{"title":"T","slug":"t","metaDescription":"M","author":"A","articleBody_HTML":"<h1>T</h1><p>Body.</p>","poweredBy":"POWERED BY ACME"}"#;
        let post = decode_post(reply, BodyFormat::Html).unwrap();
        assert_eq!(
            post.body,
            ArticleBody::Html("<h1>T</h1><p>Body.</p>".into())
        );
        assert_eq!(post.powered_by.as_deref(), Some("POWERED BY ACME"));

        // тот же ответ в markdown-режиме не проходит: ключ тела другой
        let err = decode_post(reply, BodyFormat::Markdown).unwrap_err();
        assert!(err.to_string().contains("`articleBody`"));
    }

    #[test]
    fn test_strip_code_fence_passthrough() {
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```{}```"), "{}");
    }
}
