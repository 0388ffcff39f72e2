use serde::{Deserialize, Serialize};

/// Формат тела статьи, выбирается один раз в конфигурации бэкенда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyFormat {
    Markdown,
    Html,
}

impl BodyFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "markdown" => Ok(BodyFormat::Markdown),
            "html" => Ok(BodyFormat::Html),
            _ => Err(format!("Unknown body format: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyFormat::Markdown => "markdown",
            BodyFormat::Html => "html",
        }
    }

    /// Ключ поля тела статьи в ответе модели
    pub fn wire_key(&self) -> &'static str {
        match self {
            BodyFormat::Markdown => "articleBody",
            BodyFormat::Html => "articleBody_HTML",
        }
    }
}

/// Тело статьи: один канонический контракт вместо двух
/// несовместимых форм ответа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "source", rename_all = "lowercase")]
pub enum ArticleBody {
    Markdown(String),
    Html(String),
}

impl ArticleBody {
    /// Исходный текст разметки как есть
    pub fn source(&self) -> &str {
        match self {
            ArticleBody::Markdown(s) | ArticleBody::Html(s) => s,
        }
    }

    pub fn format(&self) -> BodyFormat {
        match self {
            ArticleBody::Markdown(_) => BodyFormat::Markdown,
            ArticleBody::Html(_) => BodyFormat::Html,
        }
    }
}

/// Сгенерированная статья. Создается один раз на успешный запрос,
/// не изменяется, следующий запрос заменяет ее целиком.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub title: String,
    /// URL-слаг, выведенный моделью из заголовка
    pub slug: String,
    pub meta_description: String,
    /// Автор из брифа
    pub author: String,
    /// Строка брендинга, если настроена
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powered_by: Option<String>,
    pub body: ArticleBody,
}

/// Тело ошибки API: короткое фиксированное сообщение плюс деталь
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            error: error.into(),
            detail,
        }
    }

    /// Сообщение для показа пользователю
    pub fn display(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{} {}", self.error, detail),
            None => self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_format_round_trip() {
        assert_eq!(BodyFormat::from_str("markdown"), Ok(BodyFormat::Markdown));
        assert_eq!(BodyFormat::from_str("html"), Ok(BodyFormat::Html));
        assert!(BodyFormat::from_str("plain").is_err());
        assert_eq!(BodyFormat::Markdown.as_str(), "markdown");
    }

    #[test]
    fn test_wire_key_matches_variant() {
        assert_eq!(BodyFormat::Markdown.wire_key(), "articleBody");
        assert_eq!(BodyFormat::Html.wire_key(), "articleBody_HTML");
    }

    #[test]
    fn test_article_body_source() {
        let body = ArticleBody::Markdown("# Title\n\nText".into());
        assert_eq!(body.source(), "# Title\n\nText");
        assert_eq!(body.format(), BodyFormat::Markdown);
    }

    #[test]
    fn test_post_serde_shape() {
        let post = GeneratedPost {
            title: "Five Budgeting Tips for Young Professionals".into(),
            slug: "five-budgeting-tips-for-young-professionals".into(),
            meta_description: "Simple tips.".into(),
            author: "Jane Doe".into(),
            powered_by: None,
            body: ArticleBody::Markdown("# Five Budgeting Tips".into()),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["body"]["format"], "markdown");
        assert!(json.get("powered_by").is_none());
        let back: GeneratedPost = serde_json::from_value(json).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn test_error_body_display_appends_detail() {
        let plain = ErrorBody::new("Не удалось сгенерировать статью.", None);
        assert_eq!(plain.display(), "Не удалось сгенерировать статью.");
        let detailed = ErrorBody::new(
            "Не удалось сгенерировать статью.",
            Some("Malformed model response: missing field `slug`".into()),
        );
        assert!(detailed.display().ends_with("missing field `slug`"));
    }
}
