//! Brief form - ViewModel
//!
//! Reactive state for the content brief form

use contracts::brief::{Brief, BriefStyle, ColorChoice};
use leptos::prelude::*;

/// ViewModel формы брифа: по сигналу на поле
#[derive(Clone, Copy)]
pub struct BriefFormVm {
    pub topic: RwSignal<String>,
    pub keywords: RwSignal<String>,
    pub audience: RwSignal<String>,
    pub author: RwSignal<String>,

    pub h1_color: RwSignal<String>,
    pub use_h1_color: RwSignal<bool>,
    pub h2_color: RwSignal<String>,
    pub use_h2_color: RwSignal<bool>,
    pub h3_color: RwSignal<String>,
    pub use_h3_color: RwSignal<bool>,
    pub p_color: RwSignal<String>,
    pub use_p_color: RwSignal<bool>,

    /// Локальная ошибка валидации, до сети не доходит
    pub validation_error: RwSignal<Option<String>>,
}

impl BriefFormVm {
    /// Create new ViewModel prefilled with a sample brief
    pub fn new() -> Self {
        let style = BriefStyle::default();

        Self {
            topic: RwSignal::new("5 Simple AI Tools to Automate Your Small Business".to_string()),
            keywords: RwSignal::new(
                "AI for small business, AI automation tools, small business productivity"
                    .to_string(),
            ),
            audience: RwSignal::new(
                "Non-technical small business owners who want simple, affordable AI solutions"
                    .to_string(),
            ),
            author: RwSignal::new("Jane Doe".to_string()),
            h1_color: RwSignal::new(style.h1.color),
            use_h1_color: RwSignal::new(style.h1.enabled),
            h2_color: RwSignal::new(style.h2.color),
            use_h2_color: RwSignal::new(style.h2.enabled),
            h3_color: RwSignal::new(style.h3.color),
            use_h3_color: RwSignal::new(style.h3.enabled),
            p_color: RwSignal::new(style.paragraph.color),
            use_p_color: RwSignal::new(style.paragraph.enabled),
            validation_error: RwSignal::new(None),
        }
    }

    /// Бриф из текущих значений формы
    pub fn to_brief(&self) -> Brief {
        Brief {
            topic: self.topic.get(),
            keywords: self.keywords.get(),
            audience: self.audience.get(),
            author: self.author.get(),
            style: BriefStyle {
                h1: ColorChoice::new(self.use_h1_color.get(), self.h1_color.get()),
                h2: ColorChoice::new(self.use_h2_color.get(), self.h2_color.get()),
                h3: ColorChoice::new(self.use_h3_color.get(), self.h3_color.get()),
                paragraph: ColorChoice::new(self.use_p_color.get(), self.p_color.get()),
            },
        }
    }
}

impl Default for BriefFormVm {
    fn default() -> Self {
        Self::new()
    }
}
