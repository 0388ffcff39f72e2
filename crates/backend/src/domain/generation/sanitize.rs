//! Санитизация HTML тела статьи перед отдачей фронтенду.
//!
//! Правила:
//! - Запрещены все `<script>` теги и их содержимое
//! - Запрещены все `on*` атрибуты (onclick, onload, etc.)
//! - Запрещены `javascript:` URI
//! - Разрешены `style` и `id`: на них держится контракт
//!   условной стилизации и якорей оглавления
//! - Разрешены якорные ссылки `<a href="#...">`

/// Чистит HTML, сохраняя структуру статьи и инлайн-стили
pub fn clean_article_html(html: &str) -> String {
    ammonia::Builder::new()
        .tags(maplit::hashset![
            "h1", "h2", "h3", "p", "ul", "ol", "li", "a",
            "strong", "em", "b", "i", "br", "blockquote", "code", "pre",
        ])
        .generic_attributes(maplit::hashset!["style", "id"])
        .link_rel(None)
        .clean(html)
        .to_string()
}
