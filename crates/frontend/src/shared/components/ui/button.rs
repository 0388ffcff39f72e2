use leptos::prelude::*;

/// Кнопка с вариантами оформления: primary, secondary, ghost
#[component]
pub fn Button(
    /// Вариант: "primary" (по умолчанию), "secondary", "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Дополнительные CSS-классы
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Реактивная блокировка
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Обработчик клика
    #[prop(into)]
    on_click: Callback<leptos::ev::MouseEvent>,
    children: Children,
) -> impl IntoView {
    let css = move || {
        let variant = match variant.get().as_deref() {
            Some("secondary") => "button--secondary",
            Some("ghost") => "button--ghost",
            _ => "button--primary",
        };
        let mut css = format!("button {variant}");
        if let Some(extra) = class.get() {
            css.push(' ');
            css.push_str(&extra);
        }
        css
    };

    view! {
        <button
            type="button"
            class=css
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| on_click.run(ev)
        >
            {children()}
        </button>
    }
}
