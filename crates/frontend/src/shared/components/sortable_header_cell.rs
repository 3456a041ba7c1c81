//! Компонент сортируемой ячейки заголовка таблицы
//!
//! Добавляет индикатор сортировки (▲▼) и обрабатывает клики для
//! изменения сортировки.

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortSpec};
use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    sort_field: &'static str,

    /// Текущая сортировка таблицы
    #[prop(into)]
    sort: Signal<SortSpec>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let handle_click = move |_| {
        on_sort.run(sort_field.to_string());
    };

    let cell_class = if align == "right" {
        "table__header-cell table__header-cell--sortable table__header-cell--right"
    } else {
        "table__header-cell table__header-cell--sortable"
    };

    view! {
        <th class=cell_class on:click=handle_click>
            {label}
            <span class=move || get_sort_class(&sort.get().field, sort_field)>
                {move || {
                    let current = sort.get();
                    get_sort_indicator(&current.field, sort_field, current.ascending)
                }}
            </span>
        </th>
    }
}
