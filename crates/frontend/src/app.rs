use crate::brief::view::BriefForm;
use crate::post::state::{RequestState, ViewMode};
use crate::post::view::PostOutput;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Единственное разделяемое состояние: текущий запрос и режим
    // просмотра тела статьи. Пишет в него только компонент,
    // выпустивший запрос.
    let state = RwSignal::new(RequestState::Idle);
    let view_mode = RwSignal::new(ViewMode::Preview);

    view! {
        <header class="app__header">
            <h1 class="app__title">"Генератор SEO-статей"</h1>
            <span class="app__subtitle">"контент-бриф, одна кнопка, готовая статья"</span>
        </header>
        <main class="app__main">
            <section class="app__panel">
                <h2 class="app__panel-title">"Контент-бриф"</h2>
                <p class="app__panel-hint">"Заполните вводные для будущей статьи."</p>
                <BriefForm state=state view_mode=view_mode />
            </section>
            <section class="app__panel">
                <h2 class="app__panel-title">"Результат"</h2>
                <PostOutput state=state view_mode=view_mode />
            </section>
        </main>
    }
}
