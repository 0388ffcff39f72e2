use serde::{Deserialize, Serialize};

/// Выбор цвета для одного уровня разметки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorChoice {
    /// Применять ли цвет
    pub enabled: bool,
    /// CSS-литерал цвета, например "#a78bfa"
    pub color: String,
}

impl ColorChoice {
    pub fn new(enabled: bool, color: impl Into<String>) -> Self {
        Self {
            enabled,
            color: color.into(),
        }
    }

    pub fn on(color: impl Into<String>) -> Self {
        Self::new(true, color)
    }

    pub fn off(color: impl Into<String>) -> Self {
        Self::new(false, color)
    }
}

/// Настройки оформления статьи: по одной паре флаг+цвет
/// на заголовки H1-H3 и на текст абзацев
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefStyle {
    pub h1: ColorChoice,
    pub h2: ColorChoice,
    pub h3: ColorChoice,
    pub paragraph: ColorChoice,
}

impl Default for BriefStyle {
    fn default() -> Self {
        // Палитра по умолчанию из исходной формы
        Self {
            h1: ColorChoice::on("#a78bfa"),
            h2: ColorChoice::on("#c4b5fd"),
            h3: ColorChoice::on("#d1d5db"),
            paragraph: ColorChoice::on("#9ca3af"),
        }
    }
}

/// Контент-бриф: запрос пользователя на генерацию статьи.
/// Живет только в состоянии формы, никуда не сохраняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brief {
    /// Тема статьи
    pub topic: String,
    /// Ключевые слова через запятую, первое - основное
    pub keywords: String,
    /// Целевая аудитория
    pub audience: String,
    /// Автор
    pub author: String,
    /// Оформление (опционально, по умолчанию все цвета включены)
    #[serde(default)]
    pub style: BriefStyle,
}

impl Brief {
    /// Неизменяемый снимок брифа с обрезанными пробелами.
    /// Именно он уходит на бэкенд.
    pub fn trimmed(&self) -> Brief {
        Brief {
            topic: self.topic.trim().to_string(),
            keywords: self.keywords.trim().to_string(),
            audience: self.audience.trim().to_string(),
            author: self.author.trim().to_string(),
            style: self.style.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.topic.trim().is_empty() {
            return Err("Тема статьи не может быть пустой".into());
        }
        if self.keywords.trim().is_empty() {
            return Err("Укажите хотя бы одно ключевое слово".into());
        }
        if self.audience.trim().is_empty() {
            return Err("Целевая аудитория обязательна".into());
        }
        if self.author.trim().is_empty() {
            return Err("Автор обязателен".into());
        }
        Ok(())
    }

    /// Основное ключевое слово - первое в списке
    pub fn primary_keyword(&self) -> &str {
        self.keywords
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_brief() -> Brief {
        Brief {
            topic: "Five Budgeting Tips".into(),
            keywords: "budgeting, saving money".into(),
            audience: "young professionals".into(),
            author: "Jane Doe".into(),
            style: BriefStyle::default(),
        }
    }

    #[test]
    fn test_full_brief_validates() {
        assert!(full_brief().validate().is_ok());
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        for field in ["topic", "keywords", "audience", "author"] {
            let mut brief = full_brief();
            match field {
                "topic" => brief.topic = "   ".into(),
                "keywords" => brief.keywords = String::new(),
                "audience" => brief.audience = "\t".into(),
                _ => brief.author = String::new(),
            }
            assert!(brief.validate().is_err(), "пустое поле {field} прошло");
        }
    }

    #[test]
    fn test_trimmed_snapshot() {
        let mut brief = full_brief();
        brief.topic = "  Five Budgeting Tips \n".into();
        brief.author = " Jane Doe ".into();
        let snapshot = brief.trimmed();
        assert_eq!(snapshot.topic, "Five Budgeting Tips");
        assert_eq!(snapshot.author, "Jane Doe");
        // исходный бриф не изменился
        assert_eq!(brief.author, " Jane Doe ");
    }

    #[test]
    fn test_primary_keyword_is_first() {
        assert_eq!(full_brief().primary_keyword(), "budgeting");
        let mut brief = full_brief();
        brief.keywords = "solo".into();
        assert_eq!(brief.primary_keyword(), "solo");
    }

    #[test]
    fn test_style_defaults_all_enabled() {
        let style = BriefStyle::default();
        assert!(style.h1.enabled && style.h2.enabled);
        assert!(style.h3.enabled && style.paragraph.enabled);
        assert_eq!(style.h1.color, "#a78bfa");
    }
}
