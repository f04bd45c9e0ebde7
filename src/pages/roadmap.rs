//! Roadmap Page
//!
//! Three status columns with drag-and-drop on wide screens, one tab per
//! status on narrow screens.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use feedback_core::{Route, Status, ROADMAP_STATUSES};

use crate::components::RoadmapColumn;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RoadmapPage(dnd: DndSignals<Status>) -> impl IntoView {
    let store = use_app_store();
    let (active_tab, set_active_tab) = signal(Status::Planned);

    let count = move |status: Status| store.board().with(|board| board.columns().count(status));

    view! {
        <main class="roadmap">
            <header class="roadmap-header">
                <div>
                    <a class="go-back" href=Route::Suggestions.to_hash()>"‹ Go Back"</a>
                    <h2>"Roadmap"</h2>
                </div>
                <a class="btn-primary" href=Route::NewFeedback.to_hash()>"+ Add Feedback"</a>
            </header>

            <div class="roadmap-tabs">
                <nav class="roadmap-tab-bar">
                    {ROADMAP_STATUSES.into_iter().map(|status| view! {
                        <button
                            type="button"
                            class=move || if active_tab.get() == status { "roadmap-tab active" } else { "roadmap-tab" }
                            on:click=move |_| set_active_tab.set(status)
                        >
                            {status.as_str()} " (" {move || count(status)} ")"
                        </button>
                    }).collect_view()}
                </nav>
                {move || {
                    let status = active_tab.get();
                    view! { <RoadmapColumn status=status dnd=dnd draggable=false /> }
                }}
            </div>

            <div class="roadmap-columns">
                {ROADMAP_STATUSES.into_iter().map(|status| view! {
                    <RoadmapColumn status=status dnd=dnd />
                }).collect_view()}
            </div>
        </main>
    }
}
