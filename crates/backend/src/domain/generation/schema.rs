//! Фиксированная схема вывода, передаваемая сервису генерации
//! вместе с промптом.

use contracts::post::BodyFormat;
use serde_json::{json, Value};

/// Имя схемы в декларации structured output
pub const SCHEMA_NAME: &str = "blog_post";

/// JSON Schema ответа модели. Обязательные строковые поля: title,
/// slug, metaDescription, author, тело статьи под ключом варианта
/// и poweredBy, когда настроен брендинг.
pub fn response_schema(format: BodyFormat, branding: Option<&str>) -> Value {
    let body_key = format.wire_key();

    let mut properties = serde_json::Map::new();
    let mut required: Vec<&str> = vec!["title", "slug", "metaDescription", "author", body_key];

    for key in ["title", "slug", "metaDescription", "author"] {
        properties.insert(key.to_string(), json!({ "type": "string" }));
    }
    properties.insert(body_key.to_string(), json!({ "type": "string" }));

    if branding.is_some() {
        properties.insert("poweredBy".to_string(), json!({ "type": "string" }));
        required.push("poweredBy");
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_schema_requires_article_body() {
        let schema = response_schema(BodyFormat::Markdown, None);
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "articleBody"));
        assert!(!required.iter().any(|v| v == "articleBody_HTML"));
        assert!(!required.iter().any(|v| v == "poweredBy"));
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn test_html_schema_requires_html_body() {
        let schema = response_schema(BodyFormat::Html, None);
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "articleBody_HTML"));
        assert!(schema["properties"]["articleBody_HTML"].is_object());
    }

    #[test]
    fn test_branding_adds_powered_by() {
        let schema = response_schema(BodyFormat::Html, Some("POWERED BY ACME"));
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "poweredBy"));
        assert_eq!(schema["properties"]["poweredBy"]["type"], "string");
    }

    #[test]
    fn test_scalar_fields_always_required() {
        for format in [BodyFormat::Markdown, BodyFormat::Html] {
            let schema = response_schema(format, None);
            let required = schema["required"].as_array().unwrap();
            for key in ["title", "slug", "metaDescription", "author"] {
                assert!(required.iter().any(|v| v == key), "{key} не обязателен");
            }
        }
    }
}
