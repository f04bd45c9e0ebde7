//! Suggestions Page
//!
//! Filtered, sorted feedback list with the sidebar and sort header.

use leptos::prelude::*;

use feedback_core::{suggestions, Route};

use crate::components::{FeedbackCard, Sidebar, SuggestionsHeader};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <article class="empty-state">
            <h2>"There is no feedback yet."</h2>
            <p>
                "Got a suggestion? Found a bug that needs to be squashed? "
                "We love hearing about new ideas to improve our app."
            </p>
            <a class="btn-primary" href=Route::NewFeedback.to_hash()>"+ Add Feedback"</a>
        </article>
    }
}

#[component]
pub fn SuggestionsPage() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let filter = store.category_filter().get();
        let order = store.sort().get();
        store.board().with(|board| suggestions(board.items(), filter, order))
    });

    view! {
        <div class="suggestions-layout">
            <Sidebar />
            <main class="suggestions-main">
                <SuggestionsHeader count=Signal::derive(move || visible.with(Vec::len)) />

                {move || store.load_error().get().map(|err| view! {
                    <p class="load-error">"Could not load feedback: " {err}</p>
                })}

                {move || {
                    if store.loading().get() {
                        return view! { <p class="loading">"Loading…"</p> }.into_any();
                    }
                    let items = visible.get();
                    if items.is_empty() {
                        return view! { <EmptyState /> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|item| view! { <FeedbackCard item=item /> })
                        .collect_view()
                        .into_any()
                }}
            </main>
        </div>
    }
}
