//! Brief form - View Component

use super::view_model::BriefFormVm;
use crate::post::api::generate_post;
use crate::post::state::{RequestState, ViewMode};
use crate::shared::components::ui::{Button, Checkbox, Input, Textarea};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn BriefForm(
    state: RwSignal<RequestState>,
    view_mode: RwSignal<ViewMode>,
) -> impl IntoView {
    let vm = BriefFormVm::new();

    let is_loading = Signal::derive(move || state.get().is_loading());

    let handle_generate = move |_| {
        let brief = vm.to_brief();
        if let Err(e) = brief.validate() {
            vm.validation_error.set(Some(e));
            return;
        }
        vm.validation_error.set(None);

        // Неизменяемый снимок брифа: дальше форма может меняться,
        // запрос уже не затронет
        let snapshot = brief.trimmed();

        // Переход в Loading затирает прошлые результат и ошибку,
        // новая отправка всегда открывается в предпросмотре
        state.set(RequestState::Loading);
        view_mode.set(ViewMode::Preview);

        wasm_bindgen_futures::spawn_local(async move {
            match generate_post(&snapshot).await {
                Ok(post) => state.set(RequestState::Ready(post)),
                Err(message) => state.set(RequestState::Error(message)),
            }
        });
    };

    let color_rows = [
        ("Цвет H1", vm.use_h1_color, vm.h1_color),
        ("Цвет H2", vm.use_h2_color, vm.h2_color),
        ("Цвет H3", vm.use_h3_color, vm.h3_color),
        ("Цвет абзацев", vm.use_p_color, vm.p_color),
    ];

    view! {
        <div class="brief-form">
            <Input
                label="Тема статьи"
                value=vm.topic
                placeholder="О чем писать"
            />
            <Input
                label="Ключевые слова (через запятую, первое - основное)"
                value=vm.keywords
                placeholder="budgeting, saving money"
            />
            <Textarea
                label="Целевая аудитория"
                value=vm.audience
                placeholder="Для кого статья"
            />
            <Input
                label="Автор"
                value=vm.author
                placeholder="Имя автора"
            />

            <div class="brief-form__style">
                <div class="form__label">"Оформление"</div>
                {color_rows
                    .into_iter()
                    .map(|(label, enabled, color)| {
                        view! {
                            <div class="brief-form__color-row">
                                <Checkbox label=label.to_string() checked=enabled />
                                <Input
                                    input_type="color"
                                    value=color
                                    class="form__input--color"
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                vm.validation_error
                    .get()
                    .map(|e| view! { <div class="brief-form__error">{e}</div> })
            }}

            <Button
                variant="primary"
                disabled=is_loading
                on_click=Callback::new(handle_generate)
            >
                {move || if is_loading.get() { "Генерация..." } else { "Сгенерировать статью" }}
            </Button>
        </div>
    }
}
