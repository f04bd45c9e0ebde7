//! Edit Feedback Page
//!
//! Loads the item into the form; saving requires a status. Also hosts delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use feedback_core::{DetailState, FeedbackId, Route};

use crate::commands;
use crate::components::{DeleteConfirmButton, FeedbackFormFields, FormSignals};
use crate::context::use_app_context;

#[component]
pub fn EditFeedbackPage(id: FeedbackId) -> impl IntoView {
    let ctx = use_app_context();
    let form = FormSignals::new();
    let (state, set_state) = signal(DetailState::Loading);
    let id = StoredValue::new(id);

    // Load once; later reloads must not wipe what the user typed
    spawn_local(async move {
        let loaded = commands::fetch_feedback(ctx, id.get_value()).await;
        if let Some(item) = loaded.item() {
            form.fill(item);
        }
        set_state.set(loaded);
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !form.begin_submit() {
            return;
        }
        let data = form.snapshot();
        spawn_local(async move {
            match commands::save_feedback(ctx, id.get_value(), data).await {
                Ok(route) => {
                    form.submitting.set(false);
                    ctx.navigate(route);
                }
                Err(err) => form.fail(err),
            }
        });
    };

    let delete = move |_: ()| {
        if !form.begin_submit() {
            return;
        }
        spawn_local(async move {
            match commands::delete_feedback(ctx, id.get_value()).await {
                Ok(route) => {
                    form.submitting.set(false);
                    ctx.navigate(route);
                }
                Err(message) => {
                    form.submitting.set(false);
                    form.remote_error.set(Some(message));
                }
            }
        });
    };

    let back_href = Route::FeedbackDetail(id.get_value()).to_hash();

    view! {
        <main class="feedback-form-page">
            <a class="go-back" href=back_href>"‹ Go Back"</a>
            {move || match state.get() {
                DetailState::Loading => view! { <p class="loading">"Loading…"</p> }.into_any(),
                DetailState::NotFound(_) => view! {
                    <div class="detail-missing">
                        <h2>"Feedback not found"</h2>
                        <a href=Route::Suggestions.to_hash()>"Back to suggestions"</a>
                    </div>
                }.into_any(),
                DetailState::Failed(message) => view! {
                    <p class="load-error">"Could not load feedback: " {message}</p>
                }.into_any(),
                DetailState::Loaded(item) => view! {
                    <form class="feedback-form" on:submit=submit>
                        <h1>"Editing '" {item.title} "'"</h1>
                        <FeedbackFormFields form=form with_status=true />
                        <div class="form-actions">
                            <DeleteConfirmButton
                                button_class="btn-danger"
                                disabled=Signal::derive(move || form.submitting.get())
                                on_confirm=delete
                            />
                            <button
                                type="button"
                                class="btn-cancel"
                                on:click=move |_| ctx.navigate(Route::FeedbackDetail(id.get_value()))
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn-primary" disabled=move || form.submitting.get()>
                                "Save Changes"
                            </button>
                        </div>
                    </form>
                }.into_any(),
            }}
        </main>
    }
}
