use super::markdown::preview_html;
use super::state::{RequestState, ViewMode};
use crate::shared::clipboard::copy_with_ack;
use crate::shared::components::ui::Button;
use contracts::post::GeneratedPost;
use leptos::prelude::*;

/// Кнопка копирования текста в буфер с временным подтверждением
#[component]
#[allow(non_snake_case)]
pub fn CopyButton(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let copied = RwSignal::new(false);

    let handle_copy = move |_| copy_with_ack(&text.get_untracked(), copied);

    view! {
        <Button variant="ghost" on_click=Callback::new(handle_copy)>
            {move || if copied.get() { "Скопировано" } else { "Копировать" }}
        </Button>
    }
}

/// Скалярное поле статьи с кнопкой копирования.
/// Копируется ровно литеральный текст поля.
#[component]
#[allow(non_snake_case)]
pub fn CopyField(label: &'static str, value: String) -> impl IntoView {
    let value_for_copy = value.clone();

    view! {
        <div class="post__field">
            <div class="post__field-text">
                <div class="post__field-label">{label}</div>
                <div class="post__field-value">{value}</div>
            </div>
            <CopyButton text=Signal::derive(move || value_for_copy.clone()) />
        </div>
    }
}

/// Карточка сгенерированной статьи: скалярные поля и тело
/// с переключателем предпросмотр/разметка
#[component]
#[allow(non_snake_case)]
pub fn PostCard(post: GeneratedPost, view_mode: RwSignal<ViewMode>) -> impl IntoView {
    let raw_source = post.body.source().to_string();
    let preview = preview_html(&post.body);

    let is_preview = Signal::derive(move || view_mode.get() == ViewMode::Preview);

    // Копируется то, что сейчас на экране: исходная разметка
    // в режиме "Разметка", преобразованный HTML в предпросмотре
    let raw_for_copy = raw_source.clone();
    let preview_for_copy = preview.clone();
    let body_copy_text = Signal::derive(move || {
        if is_preview.get() {
            preview_for_copy.clone()
        } else {
            raw_for_copy.clone()
        }
    });

    let mode_class = move |active: bool| {
        if active {
            "post__mode post__mode--active".to_string()
        } else {
            "post__mode".to_string()
        }
    };

    view! {
        <div class="post__card">
            <CopyField label="Заголовок" value=post.title.clone() />
            <CopyField label="Слаг" value=post.slug.clone() />
            <CopyField label="Мета-описание" value=post.meta_description.clone() />
            <CopyField label="Автор" value=post.author.clone() />
            {post
                .powered_by
                .clone()
                .map(|brand| view! { <CopyField label="Брендинг" value=brand /> })}

            <div class="post__body-header">
                <div class="post__field-label">"Тело статьи"</div>
                <div class="post__modes">
                    <Button
                        variant="secondary"
                        class=Signal::derive(move || mode_class(is_preview.get()))
                        on_click=Callback::new(move |_| view_mode.set(ViewMode::Preview))
                    >
                        "Предпросмотр"
                    </Button>
                    <Button
                        variant="secondary"
                        class=Signal::derive(move || mode_class(!is_preview.get()))
                        on_click=Callback::new(move |_| view_mode.set(ViewMode::Raw))
                    >
                        "Разметка"
                    </Button>
                    <CopyButton text=body_copy_text />
                </div>
            </div>

            {move || {
                if is_preview.get() {
                    view! { <div class="post__preview" inner_html=preview.clone()></div> }
                        .into_any()
                } else {
                    view! {
                        <pre class="post__raw"><code>{raw_source.clone()}</code></pre>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Панель результата: ровно одно из четырех представлений,
/// выбираемое текущим RequestState
#[component]
#[allow(non_snake_case)]
pub fn PostOutput(state: RwSignal<RequestState>, view_mode: RwSignal<ViewMode>) -> impl IntoView {
    view! {
        <div class="post">
            {move || match state.get() {
                RequestState::Idle => {
                    view! {
                        <div class="post__placeholder">
                            "Здесь появится готовая статья. Заполните бриф и нажмите кнопку генерации."
                        </div>
                    }
                        .into_any()
                }
                RequestState::Loading => {
                    view! {
                        <div class="post__loading">
                            <div class="post__spinner"></div>
                            <p>"Модель пишет статью..."</p>
                        </div>
                    }
                        .into_any()
                }
                RequestState::Error(message) => {
                    view! { <div class="post__error">{message}</div> }.into_any()
                }
                RequestState::Ready(post) => {
                    view! { <PostCard post=post view_mode=view_mode /> }.into_any()
                }
            }}
        </div>
    }
}
