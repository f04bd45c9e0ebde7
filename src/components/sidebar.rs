//! Sidebar Component
//!
//! Board title, category filter and roadmap summary.

use leptos::prelude::*;

use feedback_core::{roadmap_counts, CategoryFilter, Route};

use crate::components::roadmap_column::column_color;
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let (menu_open, set_menu_open) = signal(false);

    let counts = Memo::new(move |_| store.board().with(|board| roadmap_counts(board.items())));

    view! {
        <aside class=move || if menu_open.get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-title">
                <div>
                    <h1>"Frontend Mentor"</h1>
                    <p>"Feedback Board"</p>
                </div>
                <button
                    type="button"
                    class="sidebar-menu-btn"
                    on:click=move |_| set_menu_open.update(|v| *v = !*v)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <ul class="category-filter">
                {CategoryFilter::ALL.into_iter().map(|filter| {
                    let is_active = move || store.category_filter().get() == filter;
                    view! {
                        <li
                            class=move || if is_active() { "category-tag active" } else { "category-tag" }
                            on:click=move |_| {
                                store_set_filter(&store, filter);
                                set_menu_open.set(false);
                            }
                        >
                            {filter.label()}
                        </li>
                    }
                }).collect_view()}
            </ul>

            <div class="sidebar-roadmap">
                <div class="sidebar-roadmap-head">
                    <h3>"Roadmap"</h3>
                    <a href=Route::Roadmap.to_hash()>"View"</a>
                </div>
                {move || counts.get().into_iter().map(|(status, count)| view! {
                    <div class="sidebar-roadmap-row">
                        <span class="status-dot" style=format!("background-color: {};", column_color(status))></span>
                        <span class="status-name">{status.as_str()}</span>
                        <span class="status-count">{count}</span>
                    </div>
                }).collect_view()}
            </div>
        </aside>
    }
}
