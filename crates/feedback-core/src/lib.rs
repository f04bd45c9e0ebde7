//! Feedback Board Core
//!
//! Platform-neutral logic behind the feedback board frontend:
//! - model: feedback entities and the closed category/status enums
//! - projection: roadmap columns derived from the flat feedback list
//! - board: drag-reorder controller with optimistic updates
//! - sync: request sequencing for mutations and list fetches
//! - cache: query cache for remote reads
//! - validation: feedback form rules
//! - api: REST access to the feedback store
//! - listing, flows, route, config: the glue the views consume

pub mod api;
pub mod board;
pub mod cache;
pub mod config;
pub mod flows;
pub mod listing;
pub mod model;
pub mod projection;
pub mod route;
pub mod sync;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiError, ApiResult, FeedbackApi, HttpFeedbackApi};
pub use board::{Board, BoardError, DragOutcome, DragPhase, Location, PersistRequest, Reconcile};
pub use cache::{FeedbackCache, Lookup, QueryCache, QueryData, QueryKey};
pub use config::Config;
pub use flows::{remove_feedback, submit_feedback_edit, submit_new_feedback, DetailState, SubmitError};
pub use listing::{roadmap_counts, suggestions, CategoryFilter, SortOrder};
pub use model::{Category, Comment, FeedbackData, FeedbackId, FeedbackItem, Reply, Status, User};
pub use projection::{project, Column, Columns, ROADMAP_STATUSES};
pub use route::Route;
pub use sync::{FetchTicket, MutationTicket, SyncTracker};
pub use validation::{validate, Field, FeedbackForm, StatusRule, ValidationErrors};
