//! Feedback Board Frontend App
//!
//! Root component: provides the store and context, follows the location
//! hash and owns the roadmap drag-and-drop bindings.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};
use reactive_stores::Store;

use feedback_core::{Config, DragOutcome, Location, Route, Status};
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DragEnd, Slot};

use crate::commands;
use crate::components::SyncNotice;
use crate::context::AppContext;
use crate::pages::{
    EditFeedbackPage, FeedbackDetailPage, NewFeedbackPage, NotFoundPage, RoadmapPage, SuggestionsPage,
};
use crate::store::{AppState, AppStateStoreFields, AppStore};

fn location(slot: Slot<Status>) -> Location {
    Location::new(slot.column, slot.index)
}

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (route, set_route) = signal(Route::parse(&current_hash()));
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (route, set_route), config);
    provide_context(ctx);

    // Back/forward and typed URLs
    let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        let next = Route::parse(&current_hash());
        debug!("[APP] hashchange -> {:?}", next);
        ctx.sync_route(next);
    });
    on_cleanup(move || hash_listener.remove());

    // Load feedbacks on mount and whenever a mutation asks for it
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        debug!("[APP] Loading feedbacks, trigger={}", trigger);
        spawn_local(commands::load_feedbacks(ctx, store));
    });

    // Roadmap drag-and-drop; bound once so page switches don't stack listeners
    let dnd = create_dnd_signals::<Status>();
    bind_global_mouseup(
        dnd,
        move |source: Slot<Status>| {
            store.board().write().begin_drag(location(source));
        },
        move |end: DragEnd<Status>| {
            let outcome = store
                .board()
                .write()
                .end_drag(location(end.source), end.destination.map(location));
            match outcome {
                Ok(DragOutcome::Committed(request)) => {
                    info!("[DND] Moved {} to {:?}", request.id, request.data.status);
                    spawn_local(commands::persist_move(ctx, store, request));
                }
                Ok(DragOutcome::NoOp) => debug!("[DND] Drop without move"),
                Err(err) => warn!("[DND] Rejected drop: {}", err),
            }
        },
    );

    view! {
        <div class="app-layout">
            <SyncNotice />
            {move || match route.get() {
                Route::Suggestions => view! { <SuggestionsPage /> }.into_any(),
                Route::FeedbackDetail(id) => view! { <FeedbackDetailPage id=id /> }.into_any(),
                Route::NewFeedback => view! { <NewFeedbackPage /> }.into_any(),
                Route::EditFeedback(id) => view! { <EditFeedbackPage id=id /> }.into_any(),
                Route::Roadmap => view! { <RoadmapPage dnd=dnd /> }.into_any(),
                Route::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </div>
    }
}
