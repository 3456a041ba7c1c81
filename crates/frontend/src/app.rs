use crate::dashboards::sales_analytics::ui::SalesAnalyticsDashboard;
use crate::domain::sales::ui::SalesList;
use crate::layout::navbar::Navbar;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <Router>
                <Navbar />
                <main class="app__content">
                    <Routes fallback=|| view! { <p class="app__not-found">"Page not found"</p> }>
                        <Route path=path!("/") view=SalesAnalyticsDashboard />
                        <Route path=path!("/sales") view=SalesList />
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
