//! Адрес бэкенда для API-запросов

/// Порт dev-сервера trunk: страница оттуда ходит на бэкенд отдельно
const TRUNK_DEV_PORT: &str = "8080";

/// База URL для API-запросов.
///
/// В собранном виде фронтенд отдается самим бэкендом из `dist`,
/// так что базой служит origin страницы. Под `trunk serve` страница
/// живет на своем порту, тогда подставляется порт бэкенда 3000.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();

    if let Ok(port) = location.port() {
        if port != TRUNK_DEV_PORT {
            if let Ok(origin) = location.origin() {
                return origin;
            }
        }
    }

    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("http://{hostname}:3000")
}
