use leptos::prelude::*;
use leptos_router::components::A;

/// Статическая навигация между двумя страницами приложения
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__link">"Dashboard"</A>
            <span class="navbar__divider">"|"</span>
            <A href="/sales" attr:class="navbar__link">"Sales"</A>
        </nav>
    }
}
