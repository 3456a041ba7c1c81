/// Универсальные утилиты для клиентских списков (поиск, сортировка, UI)
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Текст, по которому выполняется поиск
    fn search_text(&self) -> &str;

    /// Case-insensitive substring match; пустой запрос пропускает всё
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        self.search_text()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Поле и направление сортировки одной таблицы
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: false,
        }
    }

    /// Повторный клик по полю меняет направление; новое поле начинает
    /// с убывания (медали отмечают голову убывающего списка).
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = false;
        }
    }
}

/// Фильтрует и сортирует список, не изменяя исходный
///
/// Сортировка стабильная (`sort_by`): равные значения сохраняют порядок,
/// в котором прошли фильтр.
pub fn apply<T>(records: &[T], sort: &SortSpec, query: &str) -> Vec<T>
where
    T: Searchable + Sortable + Clone,
{
    let mut result: Vec<T> = records
        .iter()
        .filter(|r| r.matches_filter(query))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ord = a.compare_by_field(b, &sort.field);
        if sort.ascending {
            ord
        } else {
            ord.reverse()
        }
    });

    result
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора (активное поле выделяется)
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort table__sort--active"
    } else {
        "table__sort"
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для подсветки активного поиска)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce). Стартует с внешнего
    // значения: таблицу пересоздаёт каждая перезагрузка данных, а фильтр
    // живёт в родителе — пустой старт рассинхронизировал бы поле ввода
    // с действующим фильтром
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Каждый ввод двигает поколение; отложенный таймер срабатывает
    // только если остался последним
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let my_generation = generation.with_value(|g| g + 1);
        generation.set_value(my_generation);

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(300).await;
            if generation.get_value() == my_generation {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        generation.update_value(|g| *g += 1);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button class="search-input__clear" title="Clear" on:click=clear_filter>
                            "×"
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        revenue: f64,
    }

    impl Row {
        fn new(name: &str, revenue: f64) -> Self {
            Self {
                name: name.to_string(),
                revenue,
            }
        }
    }

    impl Searchable for Row {
        fn search_text(&self) -> &str {
            &self.name
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                "revenue" => self
                    .revenue
                    .partial_cmp(&other.revenue)
                    .unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    fn sample() -> Vec<Row> {
        vec![Row::new("A", 10.0), Row::new("B", 30.0), Row::new("C", 20.0)]
    }

    #[test]
    fn test_sort_descending_scenario() {
        let rows = sample();
        let sorted = apply(&rows, &SortSpec::descending("revenue"), "");
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        // исходный список не изменён
        assert_eq!(rows, sample());
    }

    #[test]
    fn test_filter_case_insensitive_scenario() {
        let rows = sample();
        let filtered = apply(&rows, &SortSpec::descending("revenue"), "a");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "A");
    }

    #[test]
    fn test_filter_returns_subset() {
        let rows = sample();
        for query in ["", "a", "b", "zzz"] {
            let result = apply(&rows, &SortSpec::descending("revenue"), query);
            assert!(result.len() <= rows.len());
            for item in &result {
                assert!(rows.contains(item));
                assert!(item.name.to_lowercase().contains(&query.to_lowercase()));
            }
        }
    }

    #[test]
    fn test_direction_reversal_is_permutation() {
        let rows = sample();
        let desc = apply(&rows, &SortSpec::descending("revenue"), "");
        let asc = apply(
            &rows,
            &SortSpec {
                field: "revenue".to_string(),
                ascending: true,
            },
            "",
        );
        let reversed: Vec<Row> = desc.into_iter().rev().collect();
        assert_eq!(asc, reversed);
    }

    #[test]
    fn test_idempotence() {
        let rows = sample();
        let sort = SortSpec::descending("revenue");
        let once = apply(&rows, &sort, "");
        let twice = apply(&once, &sort, "");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_toggle_same_field_twice_restores() {
        let mut sort = SortSpec::descending("revenue");
        let rows = sample();
        let original = apply(&rows, &sort, "");

        sort.toggle("revenue");
        assert!(sort.ascending);
        sort.toggle("revenue");
        assert!(!sort.ascending);
        assert_eq!(apply(&rows, &sort, ""), original);
    }

    #[test]
    fn test_toggle_new_field_defaults_descending() {
        let mut sort = SortSpec {
            field: "revenue".to_string(),
            ascending: true,
        };
        sort.toggle("name");
        assert_eq!(sort.field, "name");
        assert!(!sort.ascending);
    }

    #[test]
    fn test_stable_sort_keeps_tie_order() {
        let rows = vec![Row::new("X", 5.0), Row::new("Y", 5.0), Row::new("Z", 5.0)];
        let sorted = apply(&rows, &SortSpec::descending("revenue"), "");
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_recreated_input_starts_from_active_filter() {
        // фильтр пережил перезагрузку данных в родителе
        let (active_filter, _set_filter) = signal("wid".to_string());
        let active_filter: Signal<String> = active_filter.into();

        // пересозданный SearchInput инициализирует локальное состояние
        // из действующего фильтра, а не с пустой строки
        let (input_value, _set_input) = signal(active_filter.get_untracked());
        assert_eq!(input_value.get_untracked(), "wid");
        // кнопка очистки видна, когда input_value непустой
        assert!(!input_value.get_untracked().is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("revenue", "revenue", true), " ▲");
        assert_eq!(get_sort_indicator("revenue", "revenue", false), " ▼");
        assert_eq!(get_sort_indicator("revenue", "name", false), " ⇅");
    }
}
