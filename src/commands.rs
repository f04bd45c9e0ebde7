//! Feedback Commands
//!
//! Frontend wrappers around the feedback REST API. Each one combines the
//! HTTP client with the query cache and the store, and hands errors back
//! as display strings.

use chrono::Utc;
use log::{debug, error, warn};

use feedback_core::{
    remove_feedback, submit_feedback_edit, submit_new_feedback, DetailState, FeedbackApi,
    FeedbackForm, FeedbackId, Lookup, PersistRequest, Reconcile, Route, SubmitError,
};

use crate::context::AppContext;
use leptos::prelude::Write;

use crate::store::{AppStateStoreFields, AppStore};

/// Load the feedback list into the board, serving cached data first.
/// A cached list replays under the ticket it was fetched with, so one
/// older than a later move is discarded like any stale response.
pub async fn load_feedbacks(ctx: AppContext, store: AppStore) {
    match ctx.cached_feedbacks(Utc::now()) {
        Lookup::Fresh((ticket, items)) => {
            store.board().write().apply_refresh(ticket, items);
            *store.loading().write() = false;
        }
        Lookup::Stale((ticket, items)) => {
            store.board().write().apply_refresh(ticket, items);
            *store.loading().write() = false;
            refresh_feedbacks(ctx, store).await;
        }
        Lookup::Missing => refresh_feedbacks(ctx, store).await,
    }
}

/// Fetch the authoritative list, bypassing the cache
pub async fn refresh_feedbacks(ctx: AppContext, store: AppStore) {
    let ticket = store.board().write().begin_refresh();
    let result = ctx.api().list().await;
    *store.loading().write() = false;
    match result {
        Ok(items) => {
            debug!("[APP] Loaded {} feedbacks", items.len());
            let applied = store.board().write().apply_refresh(ticket, items.clone());
            // Only what the board accepted may be served from the cache
            if applied {
                ctx.cache_feedbacks(ticket, items, Utc::now());
            }
            *store.load_error().write() = None;
        }
        Err(err) => {
            error!("[APP] Loading feedbacks failed: {}", err);
            *store.load_error().write() = Some(err.to_string());
        }
    }
}

/// Send an optimistic roadmap move upstream and reconcile
pub async fn persist_move(ctx: AppContext, store: AppStore, request: PersistRequest) {
    let result = ctx.api().update(&request.id, &request.data).await;
    let reconcile = match result {
        Ok(_) => store.board().write().persist_succeeded(&request.ticket),
        Err(err) => store.board().write().persist_failed(&request.ticket, err.to_string()),
    };
    ctx.invalidate_after_update(&request.id);
    if reconcile == Reconcile::Refetch {
        refresh_feedbacks(ctx, store).await;
    }
}

/// Fetch one feedback item for the detail and edit pages
pub async fn fetch_feedback(ctx: AppContext, id: FeedbackId) -> DetailState {
    if let Lookup::Fresh(item) = ctx.cached_feedback(&id, Utc::now()) {
        return DetailState::Loaded(item);
    }
    let result = ctx.api().get(&id).await;
    if let Ok(item) = &result {
        ctx.cache_feedback(item.clone(), Utc::now());
    }
    DetailState::from_result(result)
}

pub async fn create_feedback(ctx: AppContext, form: FeedbackForm) -> Result<Route, SubmitError> {
    let route = submit_new_feedback(&ctx.api(), &form).await?;
    ctx.invalidate_after_create();
    ctx.reload();
    Ok(route)
}

pub async fn save_feedback(ctx: AppContext, id: FeedbackId, form: FeedbackForm) -> Result<Route, SubmitError> {
    let route = submit_feedback_edit(&ctx.api(), &id, &form).await?;
    ctx.invalidate_after_update(&id);
    ctx.reload();
    Ok(route)
}

pub async fn delete_feedback(ctx: AppContext, id: FeedbackId) -> Result<Route, String> {
    let route = remove_feedback(&ctx.api(), &id).await.map_err(|e| {
        warn!("[APP] Deleting {} failed: {}", id, e);
        e.to_string()
    })?;
    ctx.invalidate_after_delete(&id);
    ctx.reload();
    Ok(route)
}
