//! Sync Notice Component
//!
//! Banner for a failed roadmap move. Dismisses itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_clear_board_error, use_app_store, AppStateStoreFields};

const NOTICE_MS: u32 = 5_000;

#[component]
pub fn SyncNotice() -> impl IntoView {
    let store = use_app_store();
    let message = Memo::new(move |_| store.board().with(|board| board.last_error().map(str::to_string)));

    Effect::new(move |_| {
        let Some(shown) = message.get() else { return };
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            // A newer failure restarts the countdown
            if message.get_untracked().as_deref() == Some(shown.as_str()) {
                store_clear_board_error(&store);
            }
        });
    });

    move || {
        message.get().map(|text| {
            view! {
                <div class="sync-notice" role="alert">
                    <span>"Could not save the move: " {text}</span>
                    <button type="button" class="sync-notice-close" on:click=move |_| store_clear_board_error(&store)>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
