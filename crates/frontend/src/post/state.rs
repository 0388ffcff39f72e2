use contracts::post::GeneratedPost;

/// Состояние текущего запроса генерации.
///
/// Ровно одно из состояний авторитетно в любой момент времени:
/// переход в Loading при новой отправке сам по себе затирает
/// прошлые результат и ошибку.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Ready(GeneratedPost),
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Режим просмотра тела статьи
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Preview,
    Raw,
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::post::ArticleBody;

    #[test]
    fn test_only_loading_is_loading() {
        assert!(RequestState::Loading.is_loading());
        assert!(!RequestState::Idle.is_loading());
        assert!(!RequestState::Error("x".into()).is_loading());
    }

    #[test]
    fn test_new_request_replaces_prior_state() {
        let post = GeneratedPost {
            title: "T".into(),
            slug: "t".into(),
            meta_description: "M".into(),
            author: "A".into(),
            powered_by: None,
            body: ArticleBody::Markdown("# T".into()),
        };
        let mut state = RequestState::Ready(post);
        assert!(!state.is_loading());
        // новая отправка: одно присваивание, ничего от прошлой не остается
        state = RequestState::Loading;
        assert_eq!(state, RequestState::Loading);
    }
}
