//! Запись в буфер обмена через Web Clipboard API.
//!
//! Доступ только на запись, fire-and-forget: буфер никогда
//! не читается обратно.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::{RwSignal, Set};
use wasm_bindgen_futures::spawn_local;

/// Сколько миллисекунд держится подтверждение "Скопировано"
pub const COPIED_ACK_MS: u32 = 2000;

/// Копирует текст и на время поднимает сигнал подтверждения.
/// Сигнал опустится сам по истечении COPIED_ACK_MS.
pub fn copy_with_ack(text: &str, copied: RwSignal<bool>) {
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(&text);
        if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
            copied.set(true);
            TimeoutFuture::new(COPIED_ACK_MS).await;
            copied.set(false);
        }
    });
}
