use leptos::prelude::*;

/// Флажок с подписью, привязанный к булеву сигналу
#[component]
pub fn Checkbox(
    /// Подпись справа от флажка
    #[prop(into)]
    label: Signal<String>,
    /// Сигнал состояния
    checked: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox-wrapper">
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
