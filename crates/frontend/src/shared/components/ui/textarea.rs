use leptos::prelude::*;

/// Многострочное поле формы, привязанное к сигналу значения
#[component]
pub fn Textarea(
    /// Подпись над полем
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Сигнал значения
    value: RwSignal<String>,
    /// Placeholder
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Высота в строках
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <textarea
                class="form__textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            >
                {value.get_untracked()}
            </textarea>
        </div>
    }
}
