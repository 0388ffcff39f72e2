//! Детерминированная сборка промпта из брифа.
//!
//! Текст промпта кодирует контракт, которому обязан следовать ответ
//! модели: один JSON объект, никакого "голого" текста вне абзацев,
//! условная стилизация по уровням, оглавление, SEO-правила, слаг.

use contracts::brief::{Brief, ColorChoice};
use contracts::post::BodyFormat;

/// Системная роль модели
pub const SYSTEM_ROLE: &str = "You are an expert SEO content strategist and a senior web developer. \
     You generate complete, high-quality, SEO-optimized blog posts and you \
     follow every formatting instruction with 100% precision.";

/// Правило стилизации для уровня заголовка (h1, h2, h3)
fn heading_rule(tag: &str, choice: &ColorChoice, format: BodyFormat) -> String {
    let upper = tag.to_uppercase();
    if choice.enabled {
        format!(
            "{upper}: write every {upper} heading as a literal HTML tag whose opening tag \
             carries the inline style, exactly `<{tag} style=\"color: {color};\">`.",
            color = choice.color
        )
    } else {
        match format {
            BodyFormat::Html => format!(
                "{upper}: <{tag}> tags MUST NOT carry a style attribute."
            ),
            BodyFormat::Markdown => format!(
                "{upper}: use plain Markdown `{hashes}` syntax for {upper} headings, \
                 with no HTML tag and no style attribute.",
                hashes = "#".repeat(heading_level(tag))
            ),
        }
    }
}

fn heading_level(tag: &str) -> usize {
    tag.trim_start_matches('h').parse().unwrap_or(1)
}

/// Правило стилизации абзацев. Применяется к каждому <p> без исключений.
fn paragraph_rule(choice: &ColorChoice, format: BodyFormat) -> String {
    if choice.enabled {
        format!(
            "PARAGRAPHS: EVERY paragraph MUST be a literal \
             `<p style=\"color: {color}; font-size: 16px; line-height: 1.6;\">` element. \
             No paragraph may omit this style.",
            color = choice.color
        )
    } else {
        match format {
            BodyFormat::Html => "PARAGRAPHS: every paragraph MUST still be wrapped in <p> tags, \
                 but the <p> tags MUST NOT carry a style attribute."
                .to_string(),
            BodyFormat::Markdown => "PARAGRAPHS: write paragraphs as plain Markdown text blocks \
                 separated by blank lines, with no HTML tags and no style attribute."
                .to_string(),
        }
    }
}

fn naked_text_rule(format: BodyFormat) -> String {
    let body_key = format.wire_key();
    format!(
        "ZERO TOLERANCE FOR NAKED TEXT: every text run in `{body_key}` that is not a \
         heading or a list item MUST belong to a paragraph element. \
         `<h2>Title</h2>This is naked text.` is a FAILURE; the correct form is \
         `<h2>Title</h2><p>This is not naked text.</p>`. No raw text may float \
         directly inside a container or between headings."
    )
}

fn toc_rule(format: BodyFormat) -> String {
    match format {
        BodyFormat::Html => "TABLE OF CONTENTS: immediately after the introductory paragraph, insert a \
             \"Table of Contents\" as an HTML unordered list (<ul>). Each <li> holds an \
             anchor link (<a>) pointing at the id of an <h2> heading. Give every <h2> a \
             unique id attribute (for example id=\"section-1\") so the links resolve."
            .to_string(),
        BodyFormat::Markdown => "TABLE OF CONTENTS: immediately after the introductory paragraph, insert a \
             \"Table of Contents\" as a Markdown bulleted list of links such as \
             `- [Section title](#section-1)`. Give every second-level heading a matching \
             unique anchor by starting its text with `<a id=\"section-1\"></a>`."
            .to_string(),
    }
}

/// Собирает промпт. Один и тот же бриф всегда дает байт-в-байт
/// одинаковый текст.
pub fn build_prompt(brief: &Brief, format: BodyFormat, branding: Option<&str>) -> String {
    let body_key = format.wire_key();
    let primary = brief.primary_keyword();
    let style = &brief.style;

    let mut rules: Vec<String> = Vec::new();

    rules.push(
        "JSON ONLY: return the entire response as a single, valid JSON object. \
         Do not add any conversational text, apologies, markdown fences, or any \
         characters before the opening { or after the closing }."
            .to_string(),
    );

    match format {
        BodyFormat::Html => rules.push(format!(
            "BODY FORMAT: the `{body_key}` field holds the complete article as HTML."
        )),
        BodyFormat::Markdown => rules.push(format!(
            "BODY FORMAT: the `{body_key}` field holds the complete article as Markdown. \
             Literal HTML tags are allowed inside the Markdown only where these rules \
             explicitly require them."
        )),
    }

    match branding {
        Some(brand) => rules.push(format!(
            "BRANDING: the `author` field MUST be the exact user-provided author. \
             The `poweredBy` field MUST be the exact string: \"{brand}\"."
        )),
        None => rules.push(
            "AUTHOR: the `author` field MUST be the exact user-provided author.".to_string(),
        ),
    }

    rules.push(naked_text_rule(format));

    rules.push(format!(
        "CONDITIONAL STYLING (STRICT ADHERENCE):\n    - {}\n    - {}\n    - {}\n    - {}",
        heading_rule("h1", &style.h1, format),
        heading_rule("h2", &style.h2, format),
        heading_rule("h3", &style.h3, format),
        paragraph_rule(&style.paragraph, format),
    ));

    rules.push(toc_rule(format));

    rules.push(format!(
        "CONTENT & SEO: the article body must be at least 800 words, highly engaging \
         for the target audience (\"{audience}\"), and naturally integrate the keywords \
         (\"{keywords}\"). The primary keyword \"{primary}\" must appear in the `title`, \
         in the `metaDescription`, and in at least one second-level heading.",
        audience = brief.audience,
        keywords = brief.keywords,
    ));

    rules.push(
        "SLUG: derive the `slug` from the `title`: lowercase, words separated by hyphens."
            .to_string(),
    );

    rules.push(format!(
        "NO LEAKING: the `metaDescription` text must appear only in the `metaDescription` \
         field. Do NOT repeat it inside `{body_key}`."
    ));

    let numbered = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{}. {}", i + 1, rule))
        .collect::<Vec<_>>()
        .join("\n");

    let flag = |c: &ColorChoice| if c.enabled { "true" } else { "false" };

    format!(
        "Your task is to generate a complete, SEO-optimized blog post, formatted as a \
         single, valid JSON object. You MUST follow all of these critical, \
         non-negotiable instructions:\n\
         {numbered}\n\n\
         Here is the information to use:\n\
         - Topic: {topic}\n\
         - Keywords: {keywords}\n\
         - Target Audience: {audience}\n\
         - Author: {author}\n\
         - H1 Color: {h1} (use: {h1_on})\n\
         - H2 Color: {h2} (use: {h2_on})\n\
         - H3 Color: {h3} (use: {h3_on})\n\
         - Paragraph Color: {p} (use: {p_on})\n",
        topic = brief.topic,
        keywords = brief.keywords,
        audience = brief.audience,
        author = brief.author,
        h1 = style.h1.color,
        h1_on = flag(&style.h1),
        h2 = style.h2.color,
        h2_on = flag(&style.h2),
        h3 = style.h3.color,
        h3_on = flag(&style.h3),
        p = style.paragraph.color,
        p_on = flag(&style.paragraph),
    )
}
