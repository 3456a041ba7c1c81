use crate::shared::number_format::format_usd;
use leptos::prelude::*;

/// Карточка метрики: подпись и денежное значение
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Money value in dollars
    value: f64,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{format_usd(value)}</div>
        </div>
    }
}
