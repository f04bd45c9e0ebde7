//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use feedback_core::{Board, CategoryFilter, SortOrder};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical feedback list plus roadmap drag state
    pub board: Board,
    /// First load still in progress
    pub loading: bool,
    /// Last list fetch error
    pub load_error: Option<String>,
    /// Suggestions sort order
    pub sort: SortOrder,
    /// Suggestions category filter
    pub category_filter: CategoryFilter,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_sort(store: &AppStore, sort: SortOrder) {
    *store.sort().write() = sort;
}

pub fn store_set_filter(store: &AppStore, filter: CategoryFilter) {
    *store.category_filter().write() = filter;
}

pub fn store_clear_board_error(store: &AppStore) {
    store.board().write().clear_error();
}
