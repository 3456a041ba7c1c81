use crate::domain::sales::api;
use crate::shared::number_format::format_usd;
use contracts::domain::sales::SaleRecord;
use leptos::prelude::*;

/// Страница сырых записей продаж
///
/// Один fetch при монтировании, плоский список, без подписки на
/// обновления.
#[component]
pub fn SalesList() -> impl IntoView {
    let (sales, set_sales) = signal(Vec::<SaleRecord>::new());
    let (error, set_error) = signal(None::<String>);
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_sales().await {
                Ok(records) => {
                    set_sales.set(records);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("sales list fetch failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loaded.set(true);
        });
    });

    view! {
        <div class="sales-list">
            <h2 class="sales-list__title">"Sales Records"</h2>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                if !loaded.get() {
                    view! { <p class="sales-list__placeholder">"Loading..."</p> }.into_any()
                } else if sales.get().is_empty() && error.get().is_none() {
                    view! { <p class="sales-list__placeholder">"No records"</p> }.into_any()
                } else {
                    view! {
                        <ul class="sales-list__items">
                            <For
                                each=move || sales.get()
                                key=|record| record.id.clone()
                                children=move |record: SaleRecord| {
                                    view! {
                                        <li class="sales-list__item">
                                            {record.product}
                                            " - "
                                            {format_usd(record.amount)}
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
