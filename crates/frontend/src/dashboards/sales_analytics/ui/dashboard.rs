use crate::dashboards::sales_analytics::api;
use crate::shared::api_utils::api_url;
use crate::shared::components::{
    BarChart, DateRangePicker, RankBadge, SortableHeaderCell, StatCard,
};
use crate::shared::date_utils::{day_end_utc, day_start_utc, default_range};
use crate::shared::fetch_seq::FetchSequencer;
use crate::shared::list_utils::{apply, SearchInput, Searchable, SortSpec, Sortable};
use crate::shared::live_updates::LiveUpdates;
use crate::shared::load_state::LoadState;
use crate::shared::number_format::format_usd;
use contracts::dashboards::sales_analytics::{
    AnalyticsRequest, AnalyticsResponse, TopCustomer, TopProduct,
};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::{Button, ButtonAppearance};

/// Имя события push-канала; payload не используется, любая эмиссия
/// просто перезапускает fetch текущего периода
const LIVE_UPDATE_EVENT: &str = "salesUpdated";

/// Строка таблицы топов: продукты и покупатели рисуются одинаково
#[derive(Clone, Debug, PartialEq)]
struct RevenueRow {
    id: String,
    name: String,
    revenue: f64,
}

impl From<TopProduct> for RevenueRow {
    fn from(p: TopProduct) -> Self {
        Self {
            id: p.product_id,
            name: p.name,
            revenue: p.revenue,
        }
    }
}

impl From<TopCustomer> for RevenueRow {
    fn from(c: TopCustomer) -> Self {
        Self {
            id: c.customer_id,
            name: c.name,
            revenue: c.revenue,
        }
    }
}

impl Searchable for RevenueRow {
    fn search_text(&self) -> &str {
        &self.name
    }
}

impl Sortable for RevenueRow {
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

#[component]
pub fn SalesAnalyticsDashboard() -> impl IntoView {
    // Период по умолчанию: с начала года по сегодня
    let (initial_from, initial_to) = default_range();
    let (date_from, set_date_from) = signal(initial_from);
    let (date_to, set_date_to) = signal(initial_to);

    let (state, set_state) = signal(LoadState::<AnalyticsResponse>::Idle);

    // Поколение перезагрузки: live-update сигнал и Retry двигают его,
    // каждый сигнал запускает ровно один fetch (без коалесцирования)
    let (reload, set_reload) = signal(0u64);

    // Состояние таблиц переживает перезагрузку данных
    let (product_sort, set_product_sort) = signal(SortSpec::descending("revenue"));
    let (customer_sort, set_customer_sort) = signal(SortSpec::descending("revenue"));
    let (product_search, set_product_search) = signal(String::new());
    let (customer_search, set_customer_search) = signal(String::new());

    let sequencer = StoredValue::new(FetchSequencer::default());

    // Fetch при монтировании и на каждое изменение периода или поколения.
    // Ответ применяется только если его токен остался последним выданным:
    // медленный ранний ответ не перекроет более свежий.
    Effect::new(move |_| {
        let from = date_from.get();
        let to = date_to.get();
        reload.track();

        let (Some(start), Some(end)) = (day_start_utc(&from), day_end_utc(&to)) else {
            log::debug!("skipping fetch for unparsable range {} .. {}", from, to);
            return;
        };
        let request = AnalyticsRequest {
            start_date: start,
            end_date: end,
        };

        let token = sequencer.try_update_value(|s| s.begin()).unwrap_or(0);
        set_state.set(LoadState::Loading);

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_analytics(&request).await;

            if !sequencer.with_value(|s| s.accept(token)) {
                log::debug!("discarding stale analytics response, token {}", token);
                return;
            }
            if let Err(e) = &result {
                log::error!("analytics fetch failed: {}", e);
            }
            set_state.set(LoadState::classify(result, AnalyticsResponse::is_empty));
        });
    });

    // Подписка на push-канал принадлежит смонтированному представлению:
    // создаётся один раз, освобождается ровно один раз при размонтировании
    let live = StoredValue::new_local(None::<LiveUpdates>);
    Effect::new(move |_| {
        if live.with_value(|l| l.is_some()) {
            return;
        }
        let subscription = LiveUpdates::subscribe(
            &api_url("/api/events"),
            LIVE_UPDATE_EVENT,
            move || {
                set_reload.update(|n| *n += 1);
            },
        );
        match subscription {
            Ok(handle) => live.set_value(Some(handle)),
            Err(e) => log::error!("live updates unavailable: {}", e),
        }
    });
    on_cleanup(move || {
        // drop закрывает EventSource и снимает слушатель
        live.set_value(None);
    });

    let on_range_change = Callback::new(move |(from, to): (String, String)| {
        set_date_from.set(from);
        set_date_to.set(to);
    });

    let on_product_sort = Callback::new(move |field: String| {
        set_product_sort.update(|s| s.toggle(&field));
    });
    let on_customer_sort = Callback::new(move |field: String| {
        set_customer_sort.update(|s| s.toggle(&field));
    });
    let on_product_search = Callback::new(move |q: String| set_product_search.set(q));
    let on_customer_search = Callback::new(move |q: String| set_customer_search.set(q));

    view! {
        <div class="dashboard">
            <h1 class="dashboard__title">"Sales Analytics Dashboard"</h1>

            <DateRangePicker date_from=date_from date_to=date_to on_change=on_range_change />

            {move || match state.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <p class="dashboard__placeholder">"Loading..."</p> }.into_any()
                }
                LoadState::Empty => {
                    view! {
                        <p class="dashboard__placeholder">
                            "No sales in the selected period"
                        </p>
                    }
                        .into_any()
                }
                LoadState::Failed(err) => {
                    view! {
                        <div class="dashboard__error">
                            <strong>"⚠ "</strong>
                            {err}
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| set_reload.update(|n| *n += 1)
                            >
                                "Retry"
                            </Button>
                        </div>
                    }
                        .into_any()
                }
                LoadState::Ready(payload) => {
                    let regions: Vec<(String, f64)> = payload
                        .region_sales
                        .iter()
                        .map(|r| (r.region.clone(), r.revenue))
                        .collect();
                    let products: Vec<RevenueRow> =
                        payload.top_products.into_iter().map(Into::into).collect();
                    let customers: Vec<RevenueRow> =
                        payload.top_customers.into_iter().map(Into::into).collect();

                    view! {
                        <div class="dashboard__metrics">
                            <StatCard label="Total Revenue".to_string() value=payload.total_revenue />
                            <StatCard label="Avg Order Value".to_string() value=payload.avg_order_value />
                        </div>

                        <RevenueTable
                            title="Top Products"
                            entity_label="Product"
                            rows=products
                            sort=product_sort
                            on_sort=on_product_sort
                            search=product_search
                            on_search=on_product_search
                        />

                        <RevenueTable
                            title="Top Customers"
                            entity_label="Customer"
                            rows=customers
                            sort=customer_sort
                            on_sort=on_customer_sort
                            search=customer_search
                            on_search=on_customer_search
                        />

                        <section class="panel">
                            <h2 class="panel__title">"Region-wise Revenue"</h2>
                            <BarChart data=regions />
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Таблица топов с поиском, сортировкой и медалями за первые три места
///
/// `rows` — срез payload; фильтрация и сортировка всегда создают новый
/// вектор, payload не мутируется и повторный fetch для этого не нужен.
#[component]
fn RevenueTable(
    title: &'static str,
    entity_label: &'static str,
    rows: Vec<RevenueRow>,
    #[prop(into)] sort: Signal<SortSpec>,
    on_sort: Callback<String>,
    #[prop(into)] search: Signal<String>,
    on_search: Callback<String>,
) -> impl IntoView {
    let visible = move || apply(&rows, &sort.get(), &search.get());

    view! {
        <section class="panel">
            <h2 class="panel__title">{title}</h2>
            <SearchInput
                value=search
                on_change=on_search
                placeholder=format!("Search {}", entity_label.to_lowercase())
            />
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell
                                label=entity_label
                                sort_field="name"
                                sort=sort
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                label="Revenue"
                                sort_field="revenue"
                                sort=sort
                                on_sort=on_sort
                                align="right"
                            />
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, row)| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                {row.name.clone()}
                                                " "
                                                <RankBadge index=idx value=row.revenue />
                                            </td>
                                            <td class="table__cell table__cell--right">
                                                {format_usd(row.revenue)}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
