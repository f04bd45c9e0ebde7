//! Suggestions Header Component
//!
//! Suggestion count, sort picker and the add-feedback link.

use leptos::prelude::*;

use feedback_core::{Route, SortOrder};

use crate::components::OptionPicker;
use crate::store::{store_set_sort, use_app_store, AppStateStoreFields};

#[component]
pub fn SuggestionsHeader(#[prop(into)] count: Signal<usize>) -> impl IntoView {
    let store = use_app_store();

    let on_sort = move |label: String| {
        if let Some(order) = SortOrder::from_label(&label) {
            store_set_sort(&store, order);
        }
    };

    view! {
        <header class="suggestions-header">
            <div class="suggestions-count">
                <span class="lightbulb">"💡"</span>
                <span>{move || count.get()} " Suggestions"</span>
            </div>
            <OptionPicker
                label="Sort by:"
                options=SortOrder::ALL.iter().map(|o| o.label()).collect()
                selected=Signal::derive(move || store.sort().get().label().to_string())
                on_select=on_sort
            />
            <a class="btn-primary" href=Route::NewFeedback.to_hash()>"+ Add Feedback"</a>
        </header>
    }
}
