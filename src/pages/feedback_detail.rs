//! Feedback Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use feedback_core::{DetailState, FeedbackId, Route};

use crate::commands;
use crate::components::{FeedbackCard, FeedbackComments};
use crate::context::use_app_context;

#[component]
pub fn FeedbackDetailPage(id: FeedbackId) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(DetailState::Loading);
    let edit_href = Route::EditFeedback(id.clone()).to_hash();

    // Refetch after any mutation elsewhere
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let id = id.clone();
        spawn_local(async move {
            set_state.set(commands::fetch_feedback(ctx, id).await);
        });
    });

    view! {
        <main class="feedback-detail">
            <nav class="detail-nav">
                <a class="go-back" href=Route::Suggestions.to_hash()>"‹ Go Back"</a>
                <Show when=move || state.with(|s| s.item().is_some())>
                    <a class="btn-secondary" href=edit_href.clone()>"Edit Feedback"</a>
                </Show>
            </nav>
            {move || match state.get() {
                DetailState::Loading => view! { <p class="loading">"Loading…"</p> }.into_any(),
                DetailState::NotFound(id) => view! {
                    <div class="detail-missing">
                        <h2>"Feedback not found"</h2>
                        <p>"No feedback with id " <code>{id.to_string()}</code> " exists."</p>
                    </div>
                }.into_any(),
                DetailState::Failed(message) => view! {
                    <p class="load-error">"Could not load feedback: " {message}</p>
                }.into_any(),
                DetailState::Loaded(item) => {
                    let comments = item.comments().to_vec();
                    view! {
                        <FeedbackCard item=item />
                        <FeedbackComments comments=comments />
                    }.into_any()
                }
            }}
        </main>
    }
}
