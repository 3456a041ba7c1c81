use crate::shared::date_utils::{default_range, month_bounds};
use chrono::{Datelike, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonGroup, ButtonSize};

/// DateRangePicker — переиспользуемый компонент для выбора периода дат
///
/// Два поля ввода дат и кнопки быстрого выбора: предыдущий месяц,
/// текущий месяц, год-к-дате.
#[component]
pub fn DateRangePicker(
    /// Значение даты "от" в формате yyyy-mm-dd
    #[prop(into)]
    date_from: Signal<String>,

    /// Значение даты "до" в формате yyyy-mm-dd
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback при изменении диапазона дат (from, to)
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    // Обработчик изменения даты "от"
    let on_from_change = {
        let on_change = on_change.clone();
        move |new_from: String| {
            let current_to = date_to.get_untracked();
            on_change.run((new_from, current_to));
        }
    };

    // Обработчик изменения даты "до"
    let on_to_change = {
        let on_change = on_change.clone();
        move |new_to: String| {
            let current_from = date_from.get_untracked();
            on_change.run((current_from, new_to));
        }
    };

    // Установить текущий месяц
    let on_current_month = {
        let on_change = on_change.clone();
        move |_| {
            on_change.run(month_bounds(Utc::now().date_naive()));
        }
    };

    // Установить предыдущий месяц относительно текущего выбранного периода
    let on_previous_month = {
        let on_change = on_change.clone();
        move |_| {
            let current_from = date_from.get_untracked();
            if let Ok(current_date) = NaiveDate::parse_from_str(&current_from, "%Y-%m-%d") {
                let (year, month) = if current_date.month() == 1 {
                    (current_date.year() - 1, 12)
                } else {
                    (current_date.year(), current_date.month() - 1)
                };
                if let Some(in_month) = NaiveDate::from_ymd_opt(year, month, 1) {
                    on_change.run(month_bounds(in_month));
                }
            }
        }
    };

    // Установить период с начала года по сегодня
    let on_year_to_date = {
        let on_change = on_change.clone();
        move |_| {
            on_change.run(default_range());
        }
    };

    view! {
        <div class="date-range-picker">
            <label class="date-range-picker__label">"Start Date"</label>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=date_from
                on:input=move |ev| {
                    on_from_change(event_target_value(&ev));
                }
            />

            <label class="date-range-picker__label">"End Date"</label>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=date_to
                on:input=move |ev| {
                    on_to_change(event_target_value(&ev));
                }
            />

            <ButtonGroup>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=on_previous_month
                >
                    "-1M"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=on_current_month
                >
                    "0M"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=on_year_to_date
                >
                    "YTD"
                </Button>
            </ButtonGroup>
        </div>
    }
}
