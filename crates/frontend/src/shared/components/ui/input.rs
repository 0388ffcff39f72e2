use leptos::prelude::*;

/// Однострочное поле формы, привязанное к сигналу значения.
/// Поле само читает сигнал и само пишет в него на каждый ввод.
#[component]
pub fn Input(
    /// Подпись над полем
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Сигнал значения
    value: RwSignal<String>,
    /// Placeholder
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Тип input: "text" (по умолчанию), "color"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Дополнительные CSS-классы
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let css = move || match class.get() {
        Some(extra) => format!("form__input {extra}"),
        None => "form__input".to_string(),
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <input
                class=css
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
