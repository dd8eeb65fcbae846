pub mod home;

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    cfg_if::cfg_if! {
        if #[cfg(feature = "ssr")] {
            if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
                response.set_status(axum::http::StatusCode::NOT_FOUND);
            }
        }
    }

    view! {
        <main class="landing__main">
            <p>"Page not found."</p>
        </main>
    }
}
