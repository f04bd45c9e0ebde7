use leptos::prelude::*;

use feedback_core::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a class="btn-primary" href=Route::Suggestions.to_hash()>"Back to suggestions"</a>
        </main>
    }
}
