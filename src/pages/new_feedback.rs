//! New Feedback Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use feedback_core::Route;

use crate::commands;
use crate::components::{FeedbackFormFields, FormSignals};
use crate::context::use_app_context;

#[component]
pub fn NewFeedbackPage() -> impl IntoView {
    let ctx = use_app_context();
    let form = FormSignals::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !form.begin_submit() {
            return;
        }
        let data = form.snapshot();
        spawn_local(async move {
            match commands::create_feedback(ctx, data).await {
                Ok(route) => {
                    form.submitting.set(false);
                    ctx.navigate(route);
                }
                Err(err) => form.fail(err),
            }
        });
    };

    view! {
        <main class="feedback-form-page">
            <a class="go-back" href=Route::Suggestions.to_hash()>"‹ Go Back"</a>
            <form class="feedback-form" on:submit=submit>
                <h1>"Create New Feedback"</h1>
                <FeedbackFormFields form=form />
                <div class="form-actions">
                    <button type="button" class="btn-cancel" on:click=move |_| ctx.navigate(Route::Suggestions)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary" disabled=move || form.submitting.get()>
                        "Add Feedback"
                    </button>
                </div>
            </form>
        </main>
    }
}
