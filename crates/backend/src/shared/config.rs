use contracts::post::BodyFormat;
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub post: PostConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    pub api_endpoint: String,
    pub api_key: String,
    pub model_name: String,
    pub temperature: f64,
    pub max_tokens: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PostConfig {
    /// Формат тела статьи в контракте с моделью
    pub body_format: BodyFormat,
    /// Строка брендинга (poweredBy). Не задана - поле не запрашивается.
    pub branding: Option<String>,
}

/// Встроенный дефолт: рабочая конфигурация без ключа API
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[llm]
api_endpoint = "https://api.openai.com/v1"
api_key = ""
model_name = "gpt-4o"
temperature = 0.7
max_tokens = 4096

[post]
body_format = "markdown"
"#;

/// Читает config.toml рядом с исполняемым файлом, при его
/// отсутствии берет встроенный дефолт. Переменная окружения
/// LLM_API_KEY всегда перекрывает ключ из файла.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_key_override(&mut config, std::env::var("LLM_API_KEY").ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    let file_path = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("config.toml")));

    if let Some(path) = file_path.filter(|p| p.exists()) {
        tracing::info!("Загружаем конфигурацию из {}", path.display());
        let contents = std::fs::read_to_string(&path)?;
        return Ok(toml::from_str(&contents)?);
    }

    tracing::info!("config.toml рядом с исполняемым файлом нет, используем встроенный дефолт");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

fn apply_key_override(config: &mut Config, key: Option<String>) {
    if let Some(key) = key {
        if !key.trim().is_empty() {
            config.llm.api_key = key;
        }
    }
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Зафиксировать конфигурацию процесса. Вызывается один раз из main.
pub fn init(config: Config) {
    let _ = CONFIG.set(config);
}

/// Конфигурация процесса. До init возвращает встроенный дефолт.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(|| {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.post.body_format, BodyFormat::Markdown);
        assert!(config.post.branding.is_none());
        assert!(config.llm.api_key.is_empty());
    }

    #[test]
    fn test_html_format_parses() {
        let toml_src = r#"
[server]
port = 3000

[llm]
api_endpoint = "https://api.openai.com/v1"
api_key = "sk-test"
model_name = "gpt-4o"
temperature = 0.5
max_tokens = 8192

[post]
body_format = "html"
branding = "POWERED BY ACME"
"#;
        let config: Config = toml::from_str(toml_src).unwrap();
        assert_eq!(config.post.body_format, BodyFormat::Html);
        assert_eq!(config.post.branding.as_deref(), Some("POWERED BY ACME"));
    }

    #[test]
    fn test_env_key_overrides_file_key() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_key_override(&mut config, Some("sk-from-env".into()));
        assert_eq!(config.llm.api_key, "sk-from-env");
    }

    #[test]
    fn test_blank_env_key_is_ignored() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.llm.api_key = "sk-from-file".into();
        apply_key_override(&mut config, Some("   ".into()));
        assert_eq!(config.llm.api_key, "sk-from-file");
        apply_key_override(&mut config, None);
        assert_eq!(config.llm.api_key, "sk-from-file");
    }
}
